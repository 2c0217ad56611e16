mod refine_tests;
