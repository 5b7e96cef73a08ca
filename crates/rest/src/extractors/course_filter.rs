//! Course list filter extractor.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campus_persistence::types::CourseFilter;

use crate::error::RestError;

/// Axum extractor for the `id` and `name` course list filters.
///
/// Empty values count as absent and unknown parameters are ignored. A
/// non-numeric `id` is a validation error on the `id` field.
#[derive(Debug, Clone, Default)]
pub struct CourseFilterQuery(pub CourseFilter);

impl CourseFilterQuery {
    /// Builds a filter from raw query parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, RestError> {
        let mut filter = CourseFilter::new();

        if let Some(raw) = params.get("id").map(|v| v.trim()).filter(|v| !v.is_empty()) {
            let id = raw
                .parse::<i64>()
                .map_err(|_| RestError::field("id", "Enter a number."))?;
            filter = filter.with_id(id);
        }

        if let Some(name) = params.get("name").filter(|v| !v.is_empty()) {
            filter = filter.with_name(name.as_str());
        }

        Ok(Self(filter))
    }

    /// Consumes the extractor and returns the filter.
    pub fn into_inner(self) -> CourseFilter {
        self.0
    }
}

impl<S> FromRequestParts<S> for CourseFilterQuery
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| RestError::BadRequest {
                message: e.body_text(),
            })?;

        Self::from_params(&params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_params_is_unfiltered() {
        let filter = CourseFilterQuery::from_params(&params(&[])).unwrap().into_inner();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_id_and_name() {
        let filter = CourseFilterQuery::from_params(&params(&[("id", "3"), ("name", "Beta")]))
            .unwrap()
            .into_inner();
        assert_eq!(filter.id, Some(3));
        assert_eq!(filter.name.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let filter = CourseFilterQuery::from_params(&params(&[("id", ""), ("name", "")]))
            .unwrap()
            .into_inner();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_unknown_params_are_ignored() {
        let filter = CourseFilterQuery::from_params(&params(&[("page", "2")]))
            .unwrap()
            .into_inner();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let err = CourseFilterQuery::from_params(&params(&[("id", "abc")])).unwrap_err();
        match err {
            RestError::Validation { errors } => {
                assert_eq!(errors["id"], vec!["Enter a number.".to_string()])
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
