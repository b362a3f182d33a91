use chrono::{Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::London;
use httpmock::prelude::*;
use strom_core::civil_midnight;
use strom_core::connector::{DemandProvider, GenerationByTypeProvider, RequestWindow};
use strom_elexon::client::ElexonClient;
use strom_elexon::{ElexonConnector, GB_GENERATION_TYPES};
use strom_types::{GenerationType, Region, Resolution, StromError};

fn connector(server: &MockServer) -> ElexonConnector {
    let client = ElexonClient::builder()
        .api_key("test-key")
        .base_url(server.base_url())
        .build()
        .unwrap();
    ElexonConnector::new_with_client(client)
}

fn day_window(y: i32, m: u32, d: u32) -> RequestWindow {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let start = civil_midnight(date, London);
    RequestWindow {
        start,
        end: civil_midnight(date.succ_opt().unwrap(), London),
        resolution: Resolution::HalfHour,
    }
}

fn b0610_body(periods: &[(u32, f64)]) -> String {
    let mut body = String::from(
        "*\n*Actual Total Load per Bidding Zone\n*\n*Data item;B0610\nTimeSeriesID,SettlementDate,SettlementPeriod,Quantity,DocumentType\n",
    );
    for (p, q) in periods {
        body.push_str(&format!("ELX-EMFIP-ATL-0001,2023-09-18,{p},{q},Actual total load\n"));
    }
    body.push_str("<EOF>\n");
    body
}

#[tokio::test]
async fn demand_maps_settlement_periods_onto_half_hours() {
    let server = MockServer::start_async().await;
    let window = day_window(2023, 9, 18);

    // Periods deliberately out of order; the connector sorts by period.
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/BMRS/B0610/v1")
                .query_param("APIKey", "test-key")
                .query_param("SettlementDate", "2023-09-18")
                .query_param("Period", "*")
                .query_param("ServiceType", "csv");
            then.status(200)
                .body(b0610_body(&[(2, 28_100.0), (1, 27_500.0), (3, 28_900.0)]));
        })
        .await;

    let batch = connector(&server)
        .demand(Region::GreatBritain, &window)
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(batch.points.len(), 3);
    assert_eq!(batch.points[0].ts, window.start);
    assert_eq!(batch.points[0].value, 27_500.0);
    assert_eq!(batch.points[2].ts, window.start + Duration::minutes(60));
}

#[tokio::test]
async fn short_day_periods_stay_utc_anchored() {
    // 2023-03-26 loses an hour; settlement period 4 still lands 90 minutes
    // after civil midnight in UTC terms.
    let server = MockServer::start_async().await;
    let window = day_window(2023, 3, 26);

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/BMRS/B0610/v1")
                .query_param("SettlementDate", "2023-03-26");
            then.status(200).body(b0610_body(&[(1, 1.0), (4, 4.0), (46, 46.0)]));
        })
        .await;

    let batch = connector(&server)
        .demand(Region::GreatBritain, &window)
        .await
        .unwrap();

    assert_eq!(
        batch.points[1].ts,
        Utc.with_ymd_and_hms(2023, 3, 26, 1, 30, 0).unwrap()
    );
    // Period 46 is the last half hour of the short day.
    assert_eq!(batch.points[2].ts, window.end - Duration::minutes(30));
}

#[tokio::test]
async fn per_type_rows_are_split_by_resource_type() {
    let server = MockServer::start_async().await;
    let window = day_window(2023, 9, 18);

    let mut body = String::from(
        "*\n*Actual Aggregated Generation per Type\n*\n*Data item;B1620\nTimeSeriesID,SettlementDate,Settlement Period,Power System Resource  Type,Quantity\n",
    );
    body.push_str("T1,2023-09-18,1,Fossil Gas,9000.0\n");
    body.push_str("T2,2023-09-18,1,Wind Offshore,4200.0\n");
    body.push_str("T3,2023-09-18,2,Fossil Gas,9100.0\n");
    body.push_str("<EOF>\n");

    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/BMRS/B1620/v1")
                .query_param("SettlementDate", "2023-09-18");
            then.status(200).body(body);
        })
        .await;

    let batches = connector(&server)
        .generation_by_type(Region::GreatBritain, &window)
        .await
        .unwrap();
    assert_eq!(batches.len(), GB_GENERATION_TYPES.len());

    let gas = batches
        .iter()
        .find(|b| b.kind == GenerationType::FossilGas)
        .unwrap();
    assert_eq!(gas.batch.points.len(), 2);
    assert_eq!(gas.batch.points[1].value, 9100.0);

    let nuclear = batches
        .iter()
        .find(|b| b.kind == GenerationType::Nuclear)
        .unwrap();
    assert!(nuclear.batch.points.is_empty());
}

#[tokio::test]
async fn unparseable_quantity_is_a_malformed_batch() {
    let server = MockServer::start_async().await;
    let window = day_window(2023, 9, 18);

    server
        .mock_async(|when, then| {
            when.method(GET).path("/BMRS/B0610/v1");
            then.status(200).body(b0610_body(&[]).replace(
                "<EOF>",
                "ELX,2023-09-18,1,not-a-number,load\n<EOF>",
            ));
        })
        .await;

    let err = connector(&server)
        .demand(Region::GreatBritain, &window)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::MalformedBatch { .. }));
}

#[tokio::test]
async fn non_british_region_is_unsupported() {
    let server = MockServer::start_async().await;
    let window = day_window(2023, 9, 18);
    let err = connector(&server)
        .demand(Region::Ireland, &window)
        .await
        .unwrap_err();
    assert!(matches!(err, StromError::Unsupported { .. }));
}

#[test]
fn missing_api_key_fails_construction() {
    let err = ElexonClient::builder().build().unwrap_err();
    assert!(matches!(err, StromError::InvalidArg(_)));
}
