use shopify_function::prelude::*;
use shopify_function::Result;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use tiered_discount::decision::DiscountApplicationStrategy;
use tiered_discount::{resolve, CartLine, CartSnapshot, Configuration, DiscountDecision};

// Builds `input` and `output` from the cart query and the function API schema.
generate_types!(
    query_path = "./src/run.graphql",
    schema_path = "./schema.graphql"
);

#[shopify_function]
fn function(input: input::ResponseData) -> Result<output::FunctionResult> {
    init_logging();

    // The configuration arrives as a JSON string in the discount's metafield.
    let metafield = input.discount_node.metafield.as_ref().map(|metafield| metafield.value.as_str());
    let configuration = Configuration::from_metafield(metafield);

    let cart: CartSnapshot = input.cart.lines.iter().map(cart_line).collect();
    let decision = resolve(&configuration, &cart);

    if decision.is_empty() {
        warn!(input = %serde_json::to_string(&input)?, "no tiered discount applied");
    } else {
        info!(lines = cart.lines.len(), "tiered discount applied");
    }

    function_result(decision)
}

fn cart_line(line: &input::InputCartLines) -> CartLine {
    let amount = line.cost.total_amount.amount.as_f64();

    match &line.merchandise {
        input::InputCartLinesMerchandise::ProductVariant(variant) => {
            CartLine::variant(variant.id.clone(), variant.product.has_any_tag, amount)
        }
        _ => CartLine::other(amount),
    }
}

fn function_result(decision: DiscountDecision) -> Result<output::FunctionResult> {
    let discounts = decision
        .discounts
        .into_iter()
        .map(|discount| {
            let targets = discount
                .targets
                .into_iter()
                .map(|target| output::Target {
                    product_variant: Some(output::ProductVariantTarget {
                        id: target.product_variant_id,
                        quantity: None,
                    }),
                })
                .collect();

            Ok(output::Discount {
                value: output::Value {
                    percentage: Some(output::Percentage {
                        value: discount.value.percentage.value.parse::<f64>()?.into(),
                    }),
                    fixed_amount: None,
                },
                targets,
                message: Some(discount.message),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let discount_application_strategy = match decision.discount_application_strategy {
        DiscountApplicationStrategy::First => output::DiscountApplicationStrategy::FIRST,
        DiscountApplicationStrategy::Maximum => output::DiscountApplicationStrategy::MAXIMUM,
    };

    Ok(output::FunctionResult {
        discounts,
        discount_application_strategy,
    })
}

// Function logs are whatever is written to stderr; there is no clock in the sandbox.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();
}
