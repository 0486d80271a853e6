//! Company ownership policy.
//!
//! A company belongs to the developer account that created it. The rules
//! form a static table over (caller, action):
//!
//! | Caller                         | Create | Read / Update / Delete |
//! |--------------------------------|--------|------------------------|
//! | anonymous                      | deny   | deny                   |
//! | customer                       | deny   | deny                   |
//! | admin                          | deny   | deny                   |
//! | developer                      | allow  | only the creator       |
//!
//! Denials are [`CoreError::Forbidden`]. The one-company-per-developer rule
//! is a validation failure, see [`ensure_first_company`]. Anonymous callers
//! get 403, not 401.

use crate::error::{CoreError, CoreResult};
use crate::roles::Role;
use crate::types::DbId;

/// Maximum length of a company title, in characters.
pub const MAX_TITLE_LEN: u64 = 50;

/// Maximum length of a company description, in characters.
pub const MAX_DESCRIPTION_LEN: u64 = 1000;

/// Operations gated by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyAction {
    Create,
    Read,
    Update,
    Delete,
}

impl CompanyAction {
    fn verb(self) -> &'static str {
        match self {
            CompanyAction::Create => "create",
            CompanyAction::Read => "view",
            CompanyAction::Update => "update",
            CompanyAction::Delete => "delete",
        }
    }
}

/// The authenticated account behind a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub account_id: DbId,
    pub role: Role,
}

/// Decide whether `caller` may perform `action`.
///
/// `owner_id` is the `created_by` of the targeted company, or `None` when
/// the company does not exist (always `None` for [`CompanyAction::Create`]).
/// A missing company is denied exactly like someone else's company, so the
/// response never reveals whether a title is taken.
pub fn authorize(
    caller: Option<&Caller>,
    action: CompanyAction,
    owner_id: Option<DbId>,
) -> CoreResult<()> {
    let caller = ensure_developer(caller)
        .map_err(|_| forbidden(action, "only developer accounts manage companies"))?;

    match action {
        CompanyAction::Create => Ok(()),
        CompanyAction::Read | CompanyAction::Update | CompanyAction::Delete => {
            if owner_id == Some(caller.account_id) {
                Ok(())
            } else {
                Err(forbidden(action, "only the company owner may do this"))
            }
        }
    }
}

/// The role half of [`authorize`]: anonymous callers and non-developer
/// accounts are turned away before any company is looked up.
pub fn ensure_developer(caller: Option<&Caller>) -> CoreResult<&Caller> {
    match caller {
        Some(caller) if caller.role == Role::Developer => Ok(caller),
        Some(_) => Err(CoreError::Forbidden(
            "Only developer accounts can manage companies".into(),
        )),
        None => Err(CoreError::Forbidden(
            "Authentication required to manage companies".into(),
        )),
    }
}

/// Enforce one company per developer account.
pub fn ensure_first_company(already_owns_one: bool) -> CoreResult<()> {
    if already_owns_one {
        return Err(CoreError::Validation(
            "This account already owns a company".into(),
        ));
    }
    Ok(())
}

fn forbidden(action: CompanyAction, reason: &str) -> CoreError {
    CoreError::Forbidden(format!("Cannot {} company: {reason}", action.verb()))
}
