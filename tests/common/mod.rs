//! Shared test fixtures for the onDemand SDK integration tests.
//!
//! Provides a client wired to an unroutable endpoint (any accidental network
//! call fails fast) and the canonical product-quote response fixture shared
//! by the quote and client tests.

use ondemand_sdk::OnDemandClient;

/// A client whose endpoint is unroutable. Argument-validation tests use it
/// to prove a failing call never reached the network: a local validation
/// error surfaces as `InvalidArgument`, never as an HTTP error.
pub fn offline_client() -> OnDemandClient {
    OnDemandClient::builder()
        .endpoint("https://127.0.0.1:1/")
        .credentials("aZqpaIZkYRfPFrtUWiyq", "pfnjPvrGvmdNLSABtQmarrJcKeFtovQBeVXyzWjW")
        .default_currency("USD")
        .build()
        .unwrap()
}

/// A pending product quote with one project, one product, one SKU, and two
/// reference files.
pub const PRODUCT_QUOTE_XML: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
    <Quote>
        <QuoteID>132</QuoteID>
        <CreationDate>2014-01-25T10:32:02Z</CreationDate>
        <Status>Pending</Status>
        <AuthorizeURL>https://</AuthorizeURL>
        <RejectURL>https://</RejectURL>
        <TotalTranslations>2</TotalTranslations>
        <TranslationCredit>1</TranslationCredit>
        <TotalCost>1.70</TotalCost>
        <PrepaidCredit>5.00</PrepaidCredit>
        <AmountDue>5.00</AmountDue>
        <Currency>EUR</Currency>
        <Projects>
            <Project>
                <ProjectID>999</ProjectID>
                <ProjectName>Name of project</ProjectName>
                <ServiceID>54</ServiceID>
                <SourceLanguage>
                    <LanguageCode>en-gb</LanguageCode>
                </SourceLanguage>
                <TargetLanguages>
                    <TargetLanguage>
                        <LanguageCode>it-it</LanguageCode>
                    </TargetLanguage>
                    <TargetLanguage>
                        <LanguageCode>fr-fr</LanguageCode>
                    </TargetLanguage>
                </TargetLanguages>
                <Products>
                    <Product>
                        <AssetID>999</AssetID>
                        <SKUs>
                            <SKU>
                                <SKUNumber>123</SKUNumber>
                            </SKU>
                        </SKUs>
                        <DueDate>2014-02-11T10:22:46Z</DueDate>
                    </Product>
                </Products>
                <ReferenceFiles>
                    <ReferenceFile>
                        <AssetID>12345</AssetID>
                        <FileName>my-file.txt</FileName>
                        <URL>https://ondemand.example.com/api/files/12345</URL>
                        <TargetLanguages />
                    </ReferenceFile>
                    <ReferenceFile>
                        <AssetID>12346</AssetID>
                        <FileName>my-file.txt</FileName>
                        <URL>https://ondemand.example.com/api/files/12346</URL>
                        <TargetLanguages />
                    </ReferenceFile>
                </ReferenceFiles>
            </Project>
        </Projects>
    </Quote>
"#;
