//! SpaceX GraphQL API constants

/// Public SpaceX GraphQL endpoint.
pub const SPACEX_GRAPHQL_URL: &str = "https://spacex-production.up.railway.app/";

/// All rockets with basic dimensions.
pub const ROCKETS_QUERY: &str = r"{
  rockets {
    id
    name
    description
    active
    country
    company
    first_flight
    height {
      meters
    }
    mass {
      kg
    }
  }
}";

/// The five most recent past launches.
pub const LAUNCHES_QUERY: &str = r"{
  launchesPast(limit: 5) {
    id
    mission_name
    launch_date_utc
    launch_success
    rocket {
      rocket_name
    }
  }
}";

/// A single rocket selected by the `$id` variable.
pub const ROCKET_BY_ID_QUERY: &str = r"query RocketById($id: ID!) {
  rocket(id: $id) {
    id
    name
    description
    active
    country
  }
}";

/// Company profile.
pub const COMPANY_INFO_QUERY: &str = r"{
  company {
    name
    founder
    founded
    employees
    vehicles
    launch_sites
    test_sites
    ceo
    cto
    coo
    headquarters {
      address
      city
      state
    }
    summary
  }
}";

/// Selects fields the schema does not define.
pub const INVALID_QUERY: &str = r"{
  invalidField {
    nonExistentField
  }
}";

/// Top-level data field.
pub const DATA_FIELD: &str = "data";
/// Top-level errors field.
pub const ERRORS_FIELD: &str = "errors";
/// Message field of an error entry.
pub const MESSAGE_FIELD: &str = "message";
