use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use lambda_http::request::RequestContext;
use serde_json::Value;

/// Identity of the caller as reported by the API Gateway authorizer.
///
/// `name` is `None` when the request carried no authorizer claims. The
/// relay applies no authorization policy, so this is informational only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Caller {
    pub name: Option<String>,
}

/// Caller identification middleware.
///
/// Reads the authorizer claims from the Lambda request context and inserts a
/// [`Caller`] into request extensions for handlers to use. Never rejects.
pub async fn identify_caller(mut req: Request, next: Next) -> Response {
    let name = req
        .extensions()
        .get::<RequestContext>()
        .and_then(|ctx| serde_json::to_value(ctx).ok())
        .and_then(|ctx| caller_from_context(&ctx));

    if let Some(name) = &name {
        tracing::info!(caller = %name, "authenticated caller");
    }

    req.extensions_mut().insert(Caller { name });

    next.run(req).await
}

/// Pick the caller name out of a serialized request context.
///
/// REST APIs with a Cognito authorizer expose claims at `authorizer.claims`;
/// HTTP APIs with a JWT authorizer use `authorizer.jwt.claims`. The `email`
/// claim wins over `cognito:username`.
pub fn caller_from_context(ctx: &Value) -> Option<String> {
    let claims = ctx
        .pointer("/authorizer/claims")
        .or_else(|| ctx.pointer("/authorizer/jwt/claims"))?;

    ["email", "cognito:username"]
        .iter()
        .filter_map(|key| claims.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
