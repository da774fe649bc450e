pub mod concurrency_test;
