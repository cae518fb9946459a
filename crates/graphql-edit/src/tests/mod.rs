mod fluent_api_tests;
