code_enum! {
    /// Роль пользователя CRM
    pub enum UserRole {
        Admin => "admin",
        Manager => "manager",
        SalesAgent => "sales_agent",
        Viewer => "viewer",
    }
    default = SalesAgent;
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}
