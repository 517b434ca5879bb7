mod catalog_store_tests;
