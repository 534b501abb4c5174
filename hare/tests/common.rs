use hare_core::{Forum, get_redis_url};

pub fn create_test_forum() -> Forum {
    Forum::new(&get_redis_url()).expect("Failed to create Redis pool")
}
