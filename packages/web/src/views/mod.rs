mod applications;
mod candidate_dashboard;
mod jobs;
mod login;
mod recruiter_dashboard;
mod recruiters;

pub use applications::Applications;
pub use candidate_dashboard::CandidateDashboard;
pub use jobs::Jobs;
pub use login::Login;
pub use recruiter_dashboard::RecruiterDashboard;
pub use recruiters::ManageRecruiters;
