mod hash_functions_tests;
