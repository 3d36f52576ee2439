mod pos_tests;
