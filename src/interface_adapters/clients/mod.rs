pub mod flavor;

pub use flavor::GenerativeTextClient;
