mod mocks;
mod university_tests;
