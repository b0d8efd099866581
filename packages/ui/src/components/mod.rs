//! Small presentational building blocks shared by the views.

mod button;
pub use button::Button;

mod card;
pub use card::Card;

mod input;
pub use input::Input;

mod loader;
pub use loader::Loader;
