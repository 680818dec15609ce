//! SpaceX GraphQL checks

use assay_application::GraphQlClient;
use assay_application::clients::has_errors;
use assay_application::ports::HttpClient;
use assay_application::suite::{Check, CheckResult, SuiteError};
use assay_domain::constants::api::{STATUS_BAD_REQUEST, STATUS_OK};
use assay_domain::constants::graphql::{
    COMPANY_INFO_QUERY, INVALID_QUERY, LAUNCHES_QUERY, ROCKET_BY_ID_QUERY, ROCKETS_QUERY,
};
use assay_infrastructure::ResponseValidator;
use serde_json::{Value, json};
use tracing::info;

use super::ensure;

/// Every GraphQL check, in execution order.
pub fn checks<C: HttpClient>(client: &GraphQlClient<C>) -> Vec<Check<'_>> {
    vec![
        Check::new("query rockets", move || rockets(client)),
        Check::new("rocket structure", move || rocket_structure(client)),
        Check::new("query past launches", move || launches(client)),
        Check::new("query rocket with variables", move || rocket_by_id(client)),
        Check::new("query company info", move || company(client)),
        Check::new("invalid query reports errors", move || invalid_query(client)),
    ]
}

fn has_field(item: &Value, field: &str) -> bool {
    item.get(field).is_some_and(|value| !value.is_null())
}

async fn rockets<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let response = client.execute_query(ROCKETS_QUERY, None).await?;
    let rockets = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .no_graphql_errors()?
        .graphql_data_not_null("rockets")?
        .list_not_empty("data.rockets")?
        .extract_list("data.rockets");

    for rocket in &rockets {
        ensure(has_field(rocket, "id"), "Rocket should have an ID")?;
        ensure(has_field(rocket, "name"), "Rocket should have a name")?;
    }
    info!("Retrieved {} rockets", rockets.len());
    Ok(())
}

async fn rocket_structure<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let response = client.execute_query(ROCKETS_QUERY, None).await?;
    let validator = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .no_graphql_errors()?
        .list_not_empty("data.rockets")?;

    let first = validator
        .extract_value("data.rockets[0]")
        .ok_or_else(|| SuiteError::failed("Rockets list should not be empty"))?;
    for field in ["id", "name", "country", "company"] {
        ensure(has_field(&first, field), format!("Rocket should have {field}"))?;
    }
    Ok(())
}

async fn launches<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let response = client.execute_query(LAUNCHES_QUERY, None).await?;
    let launches = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .no_graphql_errors()?
        .graphql_data_not_null("launchesPast")?
        .list_not_empty("data.launchesPast")?
        .extract_list("data.launchesPast");

    for launch in &launches {
        ensure(has_field(launch, "id"), "Launch should have an ID")?;
        ensure(
            has_field(launch, "mission_name"),
            "Launch should have a mission name",
        )?;
    }
    info!("Retrieved {} past launches", launches.len());
    Ok(())
}

async fn rocket_by_id<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let listing = client.execute_query(ROCKETS_QUERY, None).await?;
    let rocket_id = ResponseValidator::of(&listing)
        .extract_string("data.rockets[0].id")
        .ok_or_else(|| SuiteError::failed("Need rockets to query by id"))?;
    info!("Querying rocket with ID: {rocket_id}");

    let variables = json!({ "id": rocket_id });
    let response = client
        .execute_query(ROCKET_BY_ID_QUERY, Some(&variables))
        .await?;
    let validator = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .no_graphql_errors()?
        .graphql_data_not_null("rocket")?;

    ensure(
        validator.extract_string("data.rocket.id").as_deref() == Some(rocket_id.as_str()),
        "Returned rocket ID should match requested ID",
    )?;
    info!(
        "Retrieved rocket: {}",
        validator.extract_string("data.rocket.name").unwrap_or_default()
    );
    Ok(())
}

async fn company<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let response = client.execute_query(COMPANY_INFO_QUERY, None).await?;
    let name = ResponseValidator::of(&response)
        .status_code(STATUS_OK)?
        .no_graphql_errors()?
        .graphql_data_not_null("company")?
        .extract_string("data.company.name")
        .unwrap_or_default();

    ensure(!name.is_empty(), "Company name should not be empty")?;
    info!("Company name: {name}");
    Ok(())
}

async fn invalid_query<C: HttpClient>(client: &GraphQlClient<C>) -> CheckResult {
    let response = client.execute_query(INVALID_QUERY, None).await?;
    // The SpaceX API answers schema violations with HTTP 400.
    ResponseValidator::of(&response).status_code(STATUS_BAD_REQUEST)?;
    ensure(has_errors(&response), "Invalid query should return errors")?;
    info!("Invalid query correctly returned errors");
    Ok(())
}
