mod time_range_tests;
