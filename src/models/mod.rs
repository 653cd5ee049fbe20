//! Data models for Libris
//!
//! Row structs mirror the externally managed schema. Foreign keys are
//! nullable because the schema declares them so.

pub mod author;
pub mod book;
pub mod category;
pub mod favorite;
pub mod loan;
pub mod member;
pub mod reservation;
pub mod review;

// Re-export commonly used types
pub use author::{Author, AuthorBook};
pub use book::Book;
pub use category::{BookCategory, Category};
pub use favorite::{Favorite, NewFavorite};
pub use loan::{Loan, NewLoan};
pub use member::Member;
pub use reservation::{NewReservation, Reservation};
pub use review::{NewReview, Review};
