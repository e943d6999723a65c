pub mod colours;
pub mod drawing;
pub mod widgets;
