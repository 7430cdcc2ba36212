use tonic_build::manual::{Builder, Method, Service};

// Service glue is generated from manual descriptions; the message types are
// plain prost derives in src/proto/. Route names follow the public
// hipstershop demo protocol so the generated clients talk to real backends.

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let checkout = Service::builder()
        .name("CheckoutService")
        .package("hipstershop")
        .method(unary(
            "place_order",
            "PlaceOrder",
            "crate::proto::PlaceOrderRequest",
            "crate::proto::PlaceOrderResponse",
        ))
        .build();

    let cart = Service::builder()
        .name("CartService")
        .package("hipstershop")
        .method(unary(
            "get_cart",
            "GetCart",
            "crate::proto::GetCartRequest",
            "crate::proto::Cart",
        ))
        .method(unary(
            "empty_cart",
            "EmptyCart",
            "crate::proto::EmptyCartRequest",
            "crate::proto::Empty",
        ))
        .build();

    let catalog = Service::builder()
        .name("ProductCatalogService")
        .package("hipstershop")
        .method(unary(
            "get_product",
            "GetProduct",
            "crate::proto::GetProductRequest",
            "crate::proto::Product",
        ))
        .build();

    let currency = Service::builder()
        .name("CurrencyService")
        .package("hipstershop")
        .method(unary(
            "convert",
            "Convert",
            "crate::proto::CurrencyConversionRequest",
            "crate::proto::Money",
        ))
        .build();

    let shipping = Service::builder()
        .name("ShippingService")
        .package("hipstershop")
        .method(unary(
            "get_quote",
            "GetQuote",
            "crate::proto::GetQuoteRequest",
            "crate::proto::GetQuoteResponse",
        ))
        .method(unary(
            "ship_order",
            "ShipOrder",
            "crate::proto::ShipOrderRequest",
            "crate::proto::ShipOrderResponse",
        ))
        .build();

    let payment = Service::builder()
        .name("PaymentService")
        .package("hipstershop")
        .method(unary(
            "charge",
            "Charge",
            "crate::proto::ChargeRequest",
            "crate::proto::ChargeResponse",
        ))
        .build();

    let email = Service::builder()
        .name("EmailService")
        .package("hipstershop")
        .method(unary(
            "send_order_confirmation",
            "SendOrderConfirmation",
            "crate::proto::SendOrderConfirmationRequest",
            "crate::proto::Empty",
        ))
        .build();

    let health = Service::builder()
        .name("Health")
        .package("grpc.health.v1")
        .method(unary(
            "check",
            "Check",
            "crate::proto::health::HealthCheckRequest",
            "crate::proto::health::HealthCheckResponse",
        ))
        .method(
            Method::builder()
                .name("watch")
                .route_name("Watch")
                .input_type("crate::proto::health::HealthCheckRequest")
                .output_type("crate::proto::health::HealthCheckResponse")
                .codec_path("tonic::codec::ProstCodec")
                .server_streaming()
                .build(),
        )
        .build();

    Builder::new().compile(&[
        checkout, cart, catalog, currency, shipping, payment, email, health,
    ]);
}
