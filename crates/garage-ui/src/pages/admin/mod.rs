pub mod dashboard;
pub mod orders;
pub mod workers;

pub use dashboard::AdminDashboardPage;
pub use orders::AdminOrdersPage;
pub use workers::AdminWorkersPage;
