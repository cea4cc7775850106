mod add;
mod edit;

pub use add::AddReview as Add;
pub use edit::EditReview as Edit;
