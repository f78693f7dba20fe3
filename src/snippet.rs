//! Storefront tracking-snippet builder. No request logic lives here.

/// Account-ID portion of an API key: everything before the first `-`.
pub(crate) fn account_id(api_key: &str) -> &str {
    match api_key.find('-') {
        Some(index) => &api_key[..index],
        None => "",
    }
}

/// Renders the embeddable tracking-script loader for `account_id`.
pub(crate) fn tracking_snippet(account_id: &str) -> String {
    format!(
        "<script type=\"text/javascript\">\n\
        //OMNISEND-SNIPPET-SOURCE-CODE-V1\n\
        window.omnisend = window.omnisend || [];\n\
        omnisend.push([\"accountID\", \"{account_id}\"]);\n\
        !function(){{var e=document.createElement(\"script\");e.type=\"text/javascript\",e.async=!0,e.src=\"https://omnisrc.com/inshop/launcher.js\";var t=document.getElementsByTagName(\"script\")[0];t.parentNode.insertBefore(e,t)}}();\n\
        </script>\n"
    )
}
