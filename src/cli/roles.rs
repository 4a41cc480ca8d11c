//! Roles command implementation

use colored::Colorize;

use crate::resources::RoleName;

/// Print every known role, marking those reserved for proxy administration
pub fn run() {
    for role in RoleName::ALL {
        if role.is_proxy_admin() {
            println!("{} {}", role.as_str(), "(proxy scope only)".dimmed());
        } else {
            println!("{}", role.as_str());
        }
    }
}
