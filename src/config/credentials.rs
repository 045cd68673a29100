//! Test account credentials per environment.
//!
//! Production deliberately has no entry: real accounts must never be
//! compiled into the collection helpers.

use super::environment::Environment;

/// Login for a single test account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    pub email: &'static str,
    pub password: &'static str,
}

/// Marketplace role of a test account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Buyer, Role::Seller, Role::Admin];

    /// Capitalized label used in setup output.
    pub fn label(self) -> &'static str {
        match self {
            Role::Buyer => "Buyer",
            Role::Seller => "Seller",
            Role::Admin => "Admin",
        }
    }
}

/// One test account for each role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleCredentials {
    pub buyer: Credential,
    pub seller: Credential,
    pub admin: Credential,
}

impl RoleCredentials {
    pub fn get(&self, role: Role) -> &Credential {
        match role {
            Role::Buyer => &self.buyer,
            Role::Seller => &self.seller,
            Role::Admin => &self.admin,
        }
    }
}

static DEVELOPMENT: RoleCredentials = RoleCredentials {
    buyer: Credential {
        email: "buyer@test.com",
        password: "TestPassword123!",
    },
    seller: Credential {
        email: "seller@test.com",
        password: "TestPassword123!",
    },
    admin: Credential {
        email: "admin@test.com",
        password: "AdminPassword123!",
    },
};

static STAGING: RoleCredentials = RoleCredentials {
    buyer: Credential {
        email: "staging-buyer@fliply.com",
        password: "StagingPassword123!",
    },
    seller: Credential {
        email: "staging-seller@fliply.com",
        password: "StagingPassword123!",
    },
    admin: Credential {
        email: "staging-admin@fliply.com",
        password: "AdminStagingPassword123!",
    },
};

impl Environment {
    /// Test accounts for this environment, `None` for production.
    pub fn credentials(self) -> Option<&'static RoleCredentials> {
        match self {
            Environment::Development => Some(&DEVELOPMENT),
            Environment::Staging => Some(&STAGING),
            Environment::Production => None,
        }
    }
}
