pub mod account;
pub mod book;

pub use account::InMemoryAccountRepository;
pub use book::InMemoryBookRepository;
