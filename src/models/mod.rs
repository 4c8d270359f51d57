pub mod bank;
pub mod document;
pub mod loaders;
pub mod question;
pub mod settings;

pub use bank::{BankKind, QuestionBank};
pub use document::{Metadata, OutputDocument, QuestionEntry, FORMAT_VERSION};
pub use loaders::load_settings_preset;
pub use question::{OptionLetter, Question};
pub use settings::ConversionSettings;
