//! Request routing for the dashboard.
//!
//! Routing is a pure function of the dataset, method and URI so it can be
//! exercised without a socket.

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{ALLOW, CONTENT_TYPE, HeaderValue};
use hyper::{Method, Response, StatusCode, Uri};
use serde::Serialize;
use serde_json::json;

use cupdash_core::Dataset;
use cupdash_core::dashboard::{
    TextOutput, country_wins_text, dropdown_options, final_result_text, win_map_figure,
};

use crate::error::RouteError;
use crate::http::page::render_page;

pub type Body = Full<Bytes>;

/// Answer one request against the dataset.
pub fn route(dataset: &Dataset, method: &Method, uri: &Uri) -> Response<Body> {
    match dispatch(dataset, method, uri) {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!(%method, path = uri.path(), "{err}");
            error_response(&err)
        }
    }
}

fn dispatch(dataset: &Dataset, method: &Method, uri: &Uri) -> Result<Response<Body>, RouteError> {
    if method != Method::GET {
        return Err(RouteError::MethodNotAllowed(method.clone()));
    }

    match uri.path() {
        "/" => Ok(html_response(render_page(dataset))),
        "/healthz" => Ok(response(StatusCode::OK, "text/plain; charset=utf-8", "ok")),
        "/api/options" => json_response(&dropdown_options(dataset)),
        "/api/figure" => {
            let country = query_param(uri, "country");
            json_response(&win_map_figure(dataset, country.as_deref()))
        }
        "/api/country-wins" => {
            let country = query_param(uri, "country");
            json_response(&TextOutput::from(country_wins_text(dataset, country.as_deref())))
        }
        "/api/final-result" => {
            let year = query_param(uri, "year");
            json_response(&TextOutput::from(final_result_text(dataset, year.as_deref())))
        }
        "/api/records" => json_response(&json!({
            "source": dataset.source,
            "loaded_at": dataset.loaded_at,
            "headers": dataset.headers,
            "records": dataset.records,
            "win_counts": dataset.win_counts,
        })),
        other => Err(RouteError::NotFound(other.to_string())),
    }
}

/// First value of `name` in the query string, percent-decoded.
pub fn query_param(uri: &Uri, name: &str) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn response(status: StatusCode, content_type: &'static str, body: impl Into<Bytes>) -> Response<Body> {
    let mut resp = Response::new(Full::new(body.into()));
    *resp.status_mut() = status;
    resp.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}

fn html_response(page: String) -> Response<Body> {
    response(StatusCode::OK, "text/html; charset=utf-8", page)
}

fn json_response<T: Serialize>(value: &T) -> Result<Response<Body>, RouteError> {
    let body = serde_json::to_vec(value)?;
    Ok(response(StatusCode::OK, "application/json", body))
}

fn error_response(err: &RouteError) -> Response<Body> {
    let mut resp = response(err.status(), "text/plain; charset=utf-8", err.to_string());
    if matches!(err, RouteError::MethodNotAllowed(_)) {
        resp.headers_mut().insert(ALLOW, HeaderValue::from_static("GET"));
    }
    resp
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupdash_core::FinalRecord;
    use http_body_util::BodyExt;

    fn dataset() -> Dataset {
        Dataset::build(
            vec!["Year".into(), "Winners".into()],
            vec![
                FinalRecord::new("1930", "Uruguay", "Argentina"),
                FinalRecord::new("1974", "West Germany", "Netherlands"),
                FinalRecord::new("1986", "Argentina", "West Germany"),
            ],
            "fixture",
        )
    }

    fn get(path: &str) -> Response<Body> {
        let uri: Uri = path.parse().unwrap();
        route(&dataset(), &Method::GET, &uri)
    }

    async fn body_json(resp: Response<Body>) -> serde_json::Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_country_wins_route() {
        let resp = get("/api/country-wins?country=Germany");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        let body = body_json(resp).await;
        assert_eq!(body["text"], "Germany has won the World Cup 1 time(s).");
    }

    #[tokio::test]
    async fn test_country_wins_route_decodes_query() {
        let body = body_json(get("/api/country-wins?country=Costa%20Rica")).await;
        assert_eq!(body["text"], "Costa Rica has won the World Cup 0 time(s).");
    }

    #[tokio::test]
    async fn test_country_wins_route_without_selection() {
        let body = body_json(get("/api/country-wins")).await;
        assert_eq!(body["text"], "");
    }

    #[tokio::test]
    async fn test_final_result_route() {
        let body = body_json(get("/api/final-result?year=1986")).await;
        assert_eq!(body["text"], "1986 -> Winner = Argentina, Runner-up = Germany");

        let body = body_json(get("/api/final-result?year=1931")).await;
        assert_eq!(body["text"], "");
    }

    #[tokio::test]
    async fn test_options_route() {
        let body = body_json(get("/api/options")).await;
        assert_eq!(body["countries"], json!(["Argentina", "Germany", "Uruguay"]));
        assert_eq!(body["years"], json!(["1930", "1974", "1986"]));
    }

    #[tokio::test]
    async fn test_figure_route() {
        let body = body_json(get("/api/figure?country=Uruguay")).await;
        assert_eq!(body["data"][0]["type"], "choropleth");
        assert_eq!(body["data"][0]["locations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_records_route() {
        let body = body_json(get("/api/records")).await;
        assert_eq!(body["source"], "fixture");
        assert_eq!(body["records"][1]["winner"], "Germany");
        assert_eq!(body["headers"], json!(["Year", "Winners"]));
    }

    #[test]
    fn test_index_is_html() {
        let resp = get("/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "text/html; charset=utf-8");
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(get("/nope").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_post_not_allowed() {
        let uri: Uri = "/api/options".parse().unwrap();
        let resp = route(&dataset(), &Method::POST, &uri);
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[ALLOW], "GET");
    }

    #[test]
    fn test_query_param() {
        let uri: Uri = "/x?year=2022&year=2018&country=C%C3%B4te".parse().unwrap();
        assert_eq!(query_param(&uri, "year").as_deref(), Some("2022"));
        assert_eq!(query_param(&uri, "country").as_deref(), Some("Côte"));
        assert_eq!(query_param(&uri, "missing"), None);
    }
}
