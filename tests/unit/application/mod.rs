mod text_statistics_test;
