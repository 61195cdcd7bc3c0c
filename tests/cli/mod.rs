mod shell_tests;
