//! Rendered output of worked calculations.

use hn_calc::*;
use hn_report::render;

fn reference_house() -> CalculationRequest {
    let mut request = CalculationRequest {
        building: BuildingInputs {
            floor_area: 200.0,
            volume: 500.0,
            air_exchange_rate: 0.5,
            category: CategorySelection::Known(BuildingCategory::FamilyHouse),
            exact_delta_u: 0.05,
            ..Default::default()
        },
        envelope: vec![
            EnvelopeElementRow::new(200.0, 0.22).with_label("external wall"),
            EnvelopeElementRow::new(100.0, 0.15).with_label("roof"),
            EnvelopeElementRow::new(100.0, 0.25)
                .with_b(0.5)
                .with_label("ground floor"),
            EnvelopeElementRow::new(30.0, 0.8).with_label("windows"),
        ],
        ..Default::default()
    };
    for (o, a) in [
        (Orientation::South, 15.0),
        (Orientation::East, 5.0),
        (Orientation::West, 5.0),
        (Orientation::North, 5.0),
    ] {
        request.set_glazing(o, OrientationGain::new(0.5, a));
    }
    request
}

#[test]
fn scenario_a_average_height() {
    let mut request = CalculationRequest::default();
    request.building.volume = 500.0;
    request.building.floor_area = 200.0;
    let report = render(&calculate(&request));
    assert_eq!(report.value("average_height"), Some("2.50"));
}

#[test]
fn scenario_b_envelope_row() {
    let request = CalculationRequest {
        envelope: vec![EnvelopeElementRow::new(10.0, 0.2).with_b(1.0)],
        ..Default::default()
    };
    let report = render(&calculate(&request));
    assert_eq!(report.envelope[0].ua, "2.00");
    assert_eq!(report.envelope[0].bua, "2.00");
    assert_eq!(report.value("sum_area"), Some("10.00"));
    assert_eq!(report.value("sum_bua"), Some("2.00"));
}

#[test]
fn scenario_c_thermal_bridges() {
    let mut request = CalculationRequest {
        envelope: vec![EnvelopeElementRow::new(10.0, 0.2)],
        ..Default::default()
    };
    request.building.exact_delta_u = 0.02;
    let report = render(&calculate(&request));
    assert_eq!(report.value("thermal_bridges_impact"), Some("0.20"));
    assert_eq!(report.value("total_heat_transfer"), Some("2.20"));
    assert_eq!(report.value("avg_coefficient"), Some("0.220"));
}

#[test]
fn scenario_d_ventilation() {
    let mut request = CalculationRequest::default();
    request.building.air_exchange_rate = 0.5;
    request.building.volume = 500.0;
    let report = render(&calculate(&request));
    assert_eq!(report.value("ventilation_loss"), Some("66.00"));
}

#[test]
fn scenario_e_south_gain() {
    let mut request = CalculationRequest::default();
    request.set_glazing(Orientation::South, OrientationGain::new(0.6, 5.0));
    let report = render(&calculate(&request));
    assert_eq!(report.solar_gains[0].orientation, "south");
    assert_eq!(report.solar_gains[0].gain, "432.000");
    assert_eq!(report.value("total_solar_gains"), Some("432.000"));
}

#[test]
fn scenario_f_targets() {
    let mut request = CalculationRequest {
        envelope: vec![EnvelopeElementRow::new(325.0, 0.2)],
        ..Default::default()
    };
    request.building.volume = 500.0;
    let report = render(&calculate(&request));
    assert_eq!(report.value("shape_factor"), Some("0.650"));
    assert_eq!(report.value("normalized_uem_target"), Some("0.3"));
    assert_eq!(report.value("normalized_heat_need_target"), Some("37.500"));
}

#[test]
fn reference_house_report() {
    let report = render(&calculate(&reference_house()));

    let expected = [
        ("average_height", "2.50"),
        ("sum_area", "430.00"),
        ("sum_bua", "95.50"),
        ("thermal_bridges_impact", "21.50"),
        ("total_heat_transfer", "117.00"),
        ("avg_coefficient", "0.272"),
        ("ventilation_loss", "66.00"),
        ("total_heat_loss", "183.00"),
        ("total_solar_gains", "1642.500"),
        ("internal_gains", "4000.000"),
        ("total_gains", "5642.500"),
        ("heat_need", "9663.925"),
        ("specific_heat_need", "48.320"),
        ("shape_factor", "0.860"),
        ("normalized_heat_need_target", "45.000"),
        ("normalized_uem_target", "0.28"),
        ("energy_performance_target", "40.7"),
    ];
    for (key, value) in expected {
        assert_eq!(report.value(key), Some(value), "{key}");
    }

    let flags: Vec<bool> = report.compliance.iter().map(|c| c.compliant).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(report.compliance[0].symbol, "≤");
    assert_eq!(report.compliance[0].actual, "0.272");
    assert_eq!(report.compliance[0].target, "0.280");
    assert_eq!(report.compliance[1].target, "45.000");
    assert_eq!(report.compliance[2].actual, "48.320");
    assert_eq!(report.compliance[2].target, "40.700");

    assert_eq!(report.envelope[2].label, "ground floor");
    assert_eq!(report.envelope[2].ua, "25.00");
    assert_eq!(report.envelope[2].bua, "12.50");
}

#[test]
fn half_way_values_round_up() {
    let request = CalculationRequest {
        envelope: vec![EnvelopeElementRow::new(4.5, 0.25)],
        ..Default::default()
    };
    let report = render(&calculate(&request));
    assert_eq!(report.envelope[0].ua, "1.13");
    assert_eq!(report.value("sum_bua"), Some("1.13"));

    let mut request = CalculationRequest::default();
    request.building.volume = 1.125;
    request.building.floor_area = 1.0;
    let report = render(&calculate(&request));
    assert_eq!(report.value("average_height"), Some("1.13"));
}

#[test]
fn undefined_quantities_render_empty() {
    let report = render(&calculate(&CalculationRequest::default()));
    for key in [
        "average_height",
        "avg_coefficient",
        "specific_heat_need",
        "shape_factor",
        "normalized_heat_need_target",
        "normalized_uem_target",
    ] {
        assert_eq!(report.value(key), Some(""), "{key}");
    }
    assert_eq!(report.value("energy_performance_target"), Some("40.7"));
}

#[test]
fn rerendering_is_byte_identical() {
    let request = reference_house();
    let first = render(&calculate(&request));
    let second = render(&calculate(&request));
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    assert_eq!(first.fingerprint().unwrap(), second.fingerprint().unwrap());
}

#[test]
fn json_uses_field_keys() {
    let report = render(&calculate(&reference_house())).with_title("House");
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["title"], "House");
    assert_eq!(json["fields"][0]["key"], "average_height");
    assert_eq!(json["fields"][0]["value"], "2.50");
    assert_eq!(json["compliance"][0]["compliant"], true);
}
