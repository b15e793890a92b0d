//! Quote mapping tests against canonical response fixtures.

mod common;

use ondemand_sdk::models::{FileStatus, Quote, QuoteAuthorization, RejectQuoteStatus};
use ondemand_sdk::xml::Element;
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Product quote response
// ---------------------------------------------------------------------------

#[test]
fn product_quote_response_maps_the_full_graph() {
    let root = Element::parse(common::PRODUCT_QUOTE_XML).unwrap();
    let quote = Quote::from_element(&root);

    assert_eq!(132, quote.quote_id);
    assert_eq!("Pending", quote.status);
    assert_eq!("https://", quote.authorize_url);
    assert_eq!("https://", quote.reject_url);
    assert_eq!("", quote.payment_url);
    assert_eq!(2, quote.total_translations);
    assert_eq!(1, quote.translation_credit);
    assert_eq!(Decimal::new(170, 2), quote.total_cost);
    assert_eq!(Decimal::new(500, 2), quote.prepaid_credit);
    assert_eq!(Decimal::new(500, 2), quote.amount_due);
    assert_eq!("EUR", quote.currency);
    assert_eq!(
        "2014-01-25 10:32:02 UTC",
        quote.creation_date.unwrap().to_string()
    );

    assert_eq!(1, quote.projects.len());
    let project = &quote.projects[0];

    assert_eq!(999, project.project_id);
    assert_eq!("Name of project", project.name);
    assert_eq!(54, project.service_id);
    assert_eq!("en-gb", project.source_language);
    assert_eq!(vec!["it-it".to_string(), "fr-fr".to_string()], project.target_languages);

    assert_eq!(1, project.products.len());
    let product = &project.products[0];
    assert_eq!(999, product.asset_id);
    assert_eq!(1, product.skus.len());
    assert_eq!("123", product.skus[0].sku_number);
    assert_eq!(
        "2014-02-11 10:22:46 UTC",
        product.due_date.unwrap().to_string()
    );

    assert_eq!(2, project.reference_files.len());
    assert_eq!(12345, project.reference_files[0].asset_id);
    assert_eq!("my-file.txt", project.reference_files[0].name);
    assert_eq!(
        "https://ondemand.example.com/api/files/12345",
        project.reference_files[0].url.as_ref().unwrap().as_str()
    );
    assert!(project.reference_files[0].target_languages.is_empty());
    assert_eq!(12346, project.reference_files[1].asset_id);
}

#[test]
fn quote_with_price_not_ready_defaults_the_numeric_fields() {
    let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
        <Quote>
            <QuoteID>132</QuoteID>
            <CreationDate>2014-01-25T10:32:02Z</CreationDate>
            <Status>Calculating</Status>
            <TotalCost/>
            <PrepaidCredit>5.00</PrepaidCredit>
            <AmountDue/>
            <Currency>EUR</Currency>
        </Quote>
    "#;

    let quote = Quote::from_element(&Element::parse(xml).unwrap());

    assert_eq!("Calculating", quote.status);
    assert_eq!(Decimal::ZERO, quote.total_cost);
    assert_eq!(Decimal::ZERO, quote.amount_due);
    assert_eq!(Decimal::new(500, 2), quote.prepaid_credit);
    assert_eq!("", quote.authorize_url);
    assert!(quote.projects.is_empty());
    assert!(quote.payments.is_empty());
}

#[test]
fn authorized_quote_maps_payments() {
    let xml = r#"
        <Quote>
            <QuoteID>132</QuoteID>
            <Status>Authorized</Status>
            <TotalCost>10.00</TotalCost>
            <Currency>EUR</Currency>
            <Payments>
                <Payment>
                    <PaymentType>PayPal</PaymentType>
                    <PaymentDescription>PayPal charge to buyer@example.com</PaymentDescription>
                    <PaymentAmount>10.00</PaymentAmount>
                    <PaymentCurrency>EUR</PaymentCurrency>
                </Payment>
            </Payments>
        </Quote>
    "#;

    let quote = Quote::from_element(&Element::parse(xml).unwrap());

    assert_eq!(1, quote.payments.len());
    let payment = &quote.payments[0];
    assert_eq!("PayPal", payment.payment_type);
    assert_eq!("PayPal charge to buyer@example.com", payment.description);
    assert_eq!(Decimal::new(1000, 2), payment.amount);
    assert_eq!("EUR", payment.currency);
}

#[test]
fn file_quote_response_maps_files_and_status() {
    let xml = r#"
        <Quote>
            <QuoteID>132</QuoteID>
            <Status>New</Status>
            <TotalCost/>
            <Projects>
                <Project>
                    <ProjectID>123</ProjectID>
                    <ProjectURL>https://www.example.com</ProjectURL>
                    <ProjectDueDate>2014-02-11T10:22:46Z</ProjectDueDate>
                    <Files>
                        <File>
                            <Status>Analyzing</Status>
                            <AssetID>999</AssetID>
                            <FileName>example.txt</FileName>
                        </File>
                    </Files>
                </Project>
            </Projects>
        </Quote>
    "#;

    let quote = Quote::from_element(&Element::parse(xml).unwrap());
    let project = &quote.projects[0];

    assert_eq!(
        "https://www.example.com/",
        project.url.as_ref().unwrap().as_str()
    );
    assert_eq!(1, project.files.len());
    assert_eq!(999, project.files[0].asset_id);
    assert_eq!(FileStatus::Analyzing, project.files[0].status);
    assert_eq!("example.txt", project.files[0].name);
}

// ---------------------------------------------------------------------------
// Collections and polling
// ---------------------------------------------------------------------------

#[test]
fn parse_list_maps_each_quote_child() {
    let xml = "<Quotes>\
        <Quote><QuoteID>1</QuoteID></Quote>\
        <Quote><QuoteID>2</QuoteID></Quote>\
        </Quotes>";
    let root = Element::parse(xml).unwrap();

    let quotes = Quote::parse_list(Some(&root));
    assert_eq!(2, quotes.len());
    assert_eq!(1, quotes[0].quote_id);
    assert_eq!(2, quotes[1].quote_id);
}

#[test]
fn parse_list_of_missing_container_is_empty_not_panicking() {
    assert!(Quote::parse_list(None).is_empty());

    let empty = Element::parse("<Quotes></Quotes>").unwrap();
    assert!(Quote::parse_list(Some(&empty)).is_empty());
}

#[test]
fn update_from_element_repopulates_in_place() {
    let mut quote = Quote::from_element(
        &Element::parse("<Quote><QuoteID>132</QuoteID><Status>Calculating</Status></Quote>")
            .unwrap(),
    );
    assert_eq!("Calculating", quote.status);

    quote.update_from_element(
        &Element::parse(
            "<Quote><QuoteID>132</QuoteID><Status>Pending</Status><TotalCost>1.70</TotalCost></Quote>",
        )
        .unwrap(),
    );

    assert_eq!("Pending", quote.status);
    assert_eq!(Decimal::new(170, 2), quote.total_cost);
}

// ---------------------------------------------------------------------------
// Quote authorization
// ---------------------------------------------------------------------------

#[test]
fn quote_authorization_without_payment() {
    let xml = r#"
        <QuoteAuthorization>
            <Status>Authorized</Status>
            <QuoteURL>https://www.example.com/quote</QuoteURL>
            <Projects>
                <Project><ProjectID>123</ProjectID></Project>
            </Projects>
        </QuoteAuthorization>
    "#;

    let authorization = QuoteAuthorization::from_element(&Element::parse(xml).unwrap());

    assert_eq!("Authorized", authorization.status);
    assert_eq!("https://www.example.com/quote", authorization.quote_url);
    assert_eq!("", authorization.payment_url);
    assert_eq!(1, authorization.projects.len());
}

#[test]
fn quote_authorization_with_payment_required() {
    let xml = r#"
        <QuoteAuthorization>
            <Status>Pending</Status>
            <PaymentURL>https://www.example.com/pay</PaymentURL>
            <QuoteURL>https://www.example.com/quote</QuoteURL>
        </QuoteAuthorization>
    "#;

    let authorization = QuoteAuthorization::from_element(&Element::parse(xml).unwrap());

    assert_eq!("Pending", authorization.status);
    assert_eq!("https://www.example.com/pay", authorization.payment_url);
}

// ---------------------------------------------------------------------------
// Reject status mapping (body status, not HTTP status)
// ---------------------------------------------------------------------------

#[test]
fn reject_status_maps_the_body_codes() {
    assert_eq!(RejectQuoteStatus::Success, RejectQuoteStatus::from_body_status("200"));
    assert_eq!(RejectQuoteStatus::BadRequest, RejectQuoteStatus::from_body_status("400"));
    assert_eq!(RejectQuoteStatus::Unauthorized, RejectQuoteStatus::from_body_status("401"));
    assert_eq!(RejectQuoteStatus::Conflict, RejectQuoteStatus::from_body_status("409"));
    assert_eq!(RejectQuoteStatus::Unknown, RejectQuoteStatus::from_body_status("302"));
    assert_eq!(RejectQuoteStatus::Unknown, RejectQuoteStatus::from_body_status(""));
}

#[test]
fn quote_serializes_as_a_reference_for_authorization() {
    let quote = Quote {
        quote_id: 132,
        ..Quote::default()
    };
    assert_eq!("<Quote><QuoteID>132</QuoteID></Quote>", quote.to_xml());
}
