pub mod memory;
pub mod ports;

pub use memory::InMemoryUsersRepository;
pub use ports::users::UsersRepository;
