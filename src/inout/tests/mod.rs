mod tests_storage;
