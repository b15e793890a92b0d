//! Account entities: creation request, created account, account summary,
//! and the prepaid credit-balance request/response.

use rust_decimal::Decimal;
use url::Url;

use crate::models::language::TargetLanguage;
use crate::xml::{Element, XmlBuilder};

// ---------------------------------------------------------------------------
// CreateAccount (request)
// ---------------------------------------------------------------------------

/// Request body for creating a merchant account.
///
/// `vat_id` is only required server-side for Irish merchants; the client
/// does not enforce that rule.
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub merchant_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    /// ISO 3166-1 two-character country code.
    pub country: String,
    pub vat_id: Option<String>,
}

impl CreateAccount {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        merchant_id: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
        company_name: &str,
        country: &str,
        vat_id: Option<&str>,
    ) -> CreateAccount {
        CreateAccount {
            merchant_id: merchant_id.to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            company_name: company_name.to_string(),
            country: country.to_string(),
            vat_id: vat_id.map(str::to_string),
        }
    }

    /// Serialize the request body. Empty fields are omitted entirely.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("CreateAccount");
        element_unless_empty(&mut xml, "MerchantID", &self.merchant_id);
        element_unless_empty(&mut xml, "EmailAddress", &self.email);
        element_unless_empty(&mut xml, "FirstName", &self.first_name);
        element_unless_empty(&mut xml, "LastName", &self.last_name);
        element_unless_empty(&mut xml, "CompanyName", &self.company_name);
        element_unless_empty(&mut xml, "Country", &self.country);
        element_unless_empty(&mut xml, "VATID", self.vat_id.as_deref().unwrap_or(""));
        xml.close("CreateAccount");
        xml.finish()
    }
}

fn element_unless_empty(xml: &mut XmlBuilder, tag: &str, value: &str) {
    if !value.is_empty() {
        xml.element(tag, value);
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A merchant account as returned by account creation.
#[derive(Debug, Clone)]
pub struct Account {
    pub merchant_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub country: String,
    /// Twenty-character access key identifier.
    pub access_key_id: String,
    /// Forty-character secret access key.
    pub secret_access_key: String,
    pub status: String,
}

impl Account {
    pub fn from_element(element: &Element) -> Account {
        Account {
            merchant_id: element.child_text("MerchantID"),
            email: element.child_text("EmailAddress"),
            first_name: element.child_text("FirstName"),
            last_name: element.child_text("LastName"),
            company_name: element.child_text("CompanyName"),
            country: element.child_text("Country"),
            access_key_id: element.child_text("AccessKeyID"),
            secret_access_key: element.child_text("SecretAccessKey"),
            status: element.child_text("Status"),
        }
    }
}

// ---------------------------------------------------------------------------
// AccountInformation
// ---------------------------------------------------------------------------

/// Summary of the authenticated merchant's account.
#[derive(Debug, Clone)]
pub struct AccountInformation {
    pub email: String,
    /// Currency the merchant transacts in.
    pub currency: String,
    /// Total spent, in the merchant's currency.
    pub total_spent: Decimal,
    /// Prepaid funds remaining on the account.
    pub prepaid_credit: Decimal,
    /// Translation credits granted.
    pub translation_credit: i32,
    /// Translation credits already used.
    pub translation_credit_used: i32,
    /// Number of products submitted to the service.
    pub product_count: i32,
    /// Languages the merchant has translated into.
    pub target_languages: Vec<TargetLanguage>,
}

impl AccountInformation {
    pub fn from_element(element: &Element) -> AccountInformation {
        AccountInformation {
            email: element.child_text("Email"),
            currency: element.child_text("Currency"),
            total_spent: element.child_decimal("TotalSpent"),
            prepaid_credit: element.child_decimal("PrepaidCredit"),
            translation_credit: element.child_i32("TranslationCredit"),
            translation_credit_used: element.child_i32("TranslationCreditUsed"),
            product_count: element.child_i32("ProductCount"),
            target_languages: TargetLanguage::parse_list(element.child("TargetLanguages")),
        }
    }
}

// ---------------------------------------------------------------------------
// AddCreditBalance
// ---------------------------------------------------------------------------

/// Request and response for adding money to the prepaid balance.
///
/// The response echoes the amount and currency and adds the payment page
/// URL the user must follow to complete the payment.
#[derive(Debug, Clone)]
pub struct AddCreditBalance {
    /// Amount of money to add; conventionally two decimal places.
    pub amount: Decimal,
    /// Currency the payment is made in.
    pub currency: String,
    /// URL of the payment page (response only).
    pub payment_url: Option<Url>,
}

impl AddCreditBalance {
    pub fn new(amount: Decimal, currency: &str) -> AddCreditBalance {
        AddCreditBalance {
            amount,
            currency: currency.to_string(),
            payment_url: None,
        }
    }

    pub fn from_element(element: &Element) -> AddCreditBalance {
        AddCreditBalance {
            amount: element.child_decimal("Amount"),
            currency: element.child_text("Currency"),
            payment_url: element.child_url("PaymentURL"),
        }
    }

    /// Serialize the request body. The amount renders in invariant decimal
    /// notation regardless of the process locale.
    pub fn to_xml(&self) -> String {
        let mut xml = XmlBuilder::new();
        xml.open("AddCreditBalance");
        xml.element("Amount", &self.amount.to_string());
        xml.element("Currency", &self.currency);
        xml.close("AddCreditBalance");
        xml.finish()
    }
}
