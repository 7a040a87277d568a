pub const FIRST_NAMES: [&str; 20] = [
    "John", "Jane", "Michael", "Emily", "David", "Sarah", "James", "Emma", "Robert", "Olivia",
    "William", "Sophia", "Richard", "Ava", "Joseph", "Isabella", "Thomas", "Mia", "Charles", "Charlotte",
];

pub const LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez", "Martinez",
    "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Jackson", "Martin",
];

pub const TASK_NAMES: [&str; 20] = [
    "Complete project report",
    "Review code changes",
    "Update documentation",
    "Fix critical bug",
    "Implement new feature",
    "Attend team meeting",
    "Write unit tests",
    "Deploy to production",
    "Database optimization",
    "Security audit",
    "Performance testing",
    "Code review session",
    "Client presentation",
    "Design mockups",
    "API integration",
    "System maintenance",
    "Backup database",
    "Update dependencies",
    "Refactor legacy code",
    "Create user guide",
];

pub const TASK_DESCRIPTIONS: [&str; 10] = [
    "High priority task",
    "Needs immediate attention",
    "Scheduled for next sprint",
    "Waiting for approval",
    "In progress",
    "Low priority",
    "Nice to have",
    "Customer requested",
    "Technical debt",
    "Optional enhancement",
];

pub const ASSIGNED_USER_PLACEHOLDER: &str = "Assigned User";
