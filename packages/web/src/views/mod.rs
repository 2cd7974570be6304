mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod layout;
pub use layout::{dashboard_route, DashboardLayout};

mod student;
pub use student::{
    StudentDashboard, StudentEvents, StudentFeedback, StudentLostFound, StudentNotices,
};

mod admin;
pub use admin::{
    AdminDashboard, AdminEvents, AdminFeedback, AdminLostFound, AdminNotices, ManageAdmins,
};
