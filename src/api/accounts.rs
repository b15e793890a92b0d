//! Account operations: creation, summary, and prepaid balance.

use reqwest::StatusCode;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::http::expect_root;
use crate::models::{Account, AccountInformation, AddCreditBalance, CreateAccount};

/// Account operations bound to a client.
pub struct AccountApi<'a> {
    client: &'a crate::OnDemandClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) fn new(client: &'a crate::OnDemandClient) -> Self {
        AccountApi { client }
    }

    /// Create a new merchant account.
    ///
    /// Access is restricted to an API account with create-merchant
    /// privileges.
    pub fn create(&self, request: &CreateAccount) -> Result<Account> {
        let (_, root) = self.client.transport.post_element(
            "api/account/create",
            Some(request.to_xml()),
            &[StatusCode::CREATED],
        )?;

        Ok(Account::from_element(&expect_root(root, "Account")?))
    }

    /// Information about the authenticated merchant's account.
    pub fn information(&self) -> Result<AccountInformation> {
        let root = self.client.transport.get_element("api/account/info")?;
        Ok(AccountInformation::from_element(&expect_root(
            root, "Account",
        )?))
    }

    /// Add money to the prepaid balance used to pay for projects.
    ///
    /// The response includes the payment page URL the user must follow to
    /// complete the payment.
    pub fn add_prepaid_balance(&self, amount: Decimal, currency: &str) -> Result<AddCreditBalance> {
        let request = AddCreditBalance::new(amount, currency);

        let (_, root) = self.client.transport.post_element(
            "api/account/credit-balance/add",
            Some(request.to_xml()),
            &[StatusCode::OK],
        )?;

        Ok(AddCreditBalance::from_element(&expect_root(
            root,
            "AddCreditBalance",
        )?))
    }
}
