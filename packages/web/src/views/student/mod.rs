mod dashboard;
pub use dashboard::StudentDashboard;

mod notices;
pub use notices::StudentNotices;

mod events;
pub use events::StudentEvents;

mod lostfound;
pub use lostfound::StudentLostFound;

mod feedback;
pub use feedback::StudentFeedback;
