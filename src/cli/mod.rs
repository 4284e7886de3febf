pub mod history;
pub mod init_db;

pub use history::history;
pub use init_db::init_db;
pub use notify_test::notify_test;
