pub mod prompter;

pub use prompter::Prompter;
