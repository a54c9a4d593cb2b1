use crate::product::{Product, Variant};

/// Payload handed to the cart when the shopper adds a product.
///
/// `product` is the record exactly as the card received it; the selected
/// variant, if any, travels alongside instead of being merged into it.
#[derive(Clone, Debug, PartialEq)]
pub struct CartRequest {
    pub product: Product,
    pub variant: Option<Variant>,
}

impl CartRequest {
    pub fn new(product: Product, variant: Option<Variant>) -> Self {
        Self { product, variant }
    }

    /// Unit price for this request, variant delta included
    pub fn unit_price(&self) -> Option<f64> {
        self.product.effective_price(self.variant.as_ref())
    }
}
