// templates/components/popup.rs

use crate::domain::format::{
    bedroom_label, format_date, format_percentage, format_price, INVALID_DATE,
};
use crate::domain::{GougingRule, ListingProperties};
use maud::{html, Markup};

/// Listings under the FMR rule were first seen after this date.
pub const FMR_REFERENCE_DATE: &str = "1/7/25";

/// Renders the popup fragment shown when a listing point is clicked.
///
/// Heading with the address linking out to the listing, then bedrooms,
/// home type and the block for whichever gouging rule applies.
pub fn describe(props: &ListingProperties) -> Markup {
    let rule = match props.gouging_rule {
        GougingRule::Fmr => fmr_rule(props),
        GougingRule::TenPercent => ten_percent_rule(props),
    };

    html! {
        h3 {
            a href=[props.listing_url.as_deref()] target="_blank" style="color: white;" {
                (props.street_address.as_deref().unwrap_or_default())
            }
        }
        h4 {
            (bedroom_label(props.bedrooms)) " " (props.home_type.label())
            br;
            (rule)
        }
    }
}

fn ten_percent_rule(props: &ListingProperties) -> Markup {
    // Baseline fields are optional; missing ones render blank.
    let base_date = props
        .base_price_date
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let base_price = props.base_price.map(format_price).unwrap_or_default();
    let increase = props
        .base_vs_peak_price
        .map(format_percentage)
        .unwrap_or_default();

    html! {
        "Original Rent (" (base_date) "): " strong { (base_price) }
        br;
        "Peak Listed Rent (" (peak_date(props)) "): " strong { (peak_price(props)) }
        br;
        strong { (increase) } " Increase"
    }
}

fn fmr_rule(props: &ListingProperties) -> Markup {
    let above_fmr = format_percentage(props.pct_increase_of_peak_over_base.unwrap_or(f64::NAN));

    html! {
        "Not listed previous to " (FMR_REFERENCE_DATE)
        br;
        "Listed Rent (" (peak_date(props)) "): " strong { (peak_price(props)) }
        br;
        strong { (above_fmr) } " Percent Above Fair Market Rent"
    }
}

fn peak_date(props: &ListingProperties) -> String {
    props
        .emergency_peak_price_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn peak_price(props: &ListingProperties) -> String {
    format_price(props.emergency_peak_price.unwrap_or(f64::NAN))
}
