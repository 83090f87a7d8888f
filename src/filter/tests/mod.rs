mod radius_filter_tests;
