mod dashboard;
pub use dashboard::AdminDashboard;

mod notices;
pub use notices::AdminNotices;

mod events;
pub use events::AdminEvents;

mod lostfound;
pub use lostfound::AdminLostFound;

mod feedback;
pub use feedback::AdminFeedback;

mod admins;
pub use admins::ManageAdmins;
