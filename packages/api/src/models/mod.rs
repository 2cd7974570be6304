//! Wire types for each backend resource.

mod event;
mod feedback;
mod lostfound;
mod notice;
mod stats;
mod user;

pub use event::{Event, EventCategory, EventPayload};
pub use feedback::{
    Feedback, FeedbackCategory, FeedbackPayload, FeedbackStatus, MESSAGE_MAX_LEN, SUBJECT_MAX_LEN,
};
pub use lostfound::{
    ItemKind, LostFoundCategory, LostFoundPayload, LostFoundPost, LostFoundStatus,
};
pub use notice::{Notice, NoticeCategory, NoticePayload};
pub use stats::{ActivityFeed, Stats};
pub use user::{Role, User, UserRef};
