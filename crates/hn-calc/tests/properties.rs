//! Property tests for the calculation invariants.

use hn_calc::*;
use proptest::prelude::*;

fn row_strategy() -> impl Strategy<Value = EnvelopeElementRow> {
    (
        proptest::option::of(0.0_f64..500.0),
        proptest::option::of(0.0_f64..3.0),
        proptest::option::of(0.0_f64..1.0),
    )
        .prop_map(|(area, u, b)| EnvelopeElementRow {
            label: None,
            area,
            u,
            b,
        })
}

fn glazing_strategy() -> impl Strategy<Value = OrientationGain> {
    (0.0_f64..0.9, 0.0_f64..50.0).prop_map(|(g, a)| OrientationGain::new(g, a))
}

fn category_strategy() -> impl Strategy<Value = CategorySelection> {
    prop_oneof![
        Just(CategorySelection::Unselected),
        proptest::sample::select(BuildingCategory::ALL.to_vec()).prop_map(CategorySelection::Known),
        Just(CategorySelection::Unmapped("other".to_string())),
    ]
}

fn request_strategy() -> impl Strategy<Value = CalculationRequest> {
    (
        0.0_f64..1000.0,
        0.0_f64..3000.0,
        0.0_f64..2.0,
        category_strategy(),
        0.0_f64..0.2,
        proptest::collection::vec(row_strategy(), 0..8),
        proptest::array::uniform4(glazing_strategy()),
    )
        .prop_map(
            |(floor_area, volume, rate, category, delta_u, envelope, glazing)| {
                CalculationRequest {
                    building: BuildingInputs {
                        floor_area,
                        volume,
                        air_exchange_rate: rate,
                        category,
                        exact_delta_u: delta_u,
                        ..Default::default()
                    },
                    envelope,
                    glazing,
                }
            },
        )
}

fn scalar_edit_strategy() -> impl Strategy<Value = InputEdit> {
    prop_oneof![
        (0.0_f64..1000.0).prop_map(InputEdit::FloorArea),
        (0.0_f64..3000.0).prop_map(InputEdit::Volume),
        (0.0_f64..2.0).prop_map(InputEdit::AirExchangeRate),
        category_strategy().prop_map(InputEdit::Category),
        proptest::option::of(proptest::sample::select(vec![
            InternalGainClass::FamilyHouse,
            InternalGainClass::ApartmentBuilding,
            InternalGainClass::NonResidential,
        ]))
        .prop_map(InputEdit::InternalGainClass),
        proptest::sample::select(vec![ThermalBridgeMethod::Exact, ThermalBridgeMethod::FlatRate])
            .prop_map(InputEdit::ThermalBridgeMethod),
    ]
}

fn structural_edit_strategy() -> impl Strategy<Value = InputEdit> {
    prop_oneof![
        (0.0_f64..0.2).prop_map(InputEdit::ExactDeltaU),
        proptest::option::of(proptest::sample::select(FlatRateDeltaU::ALL.to_vec()))
            .prop_map(InputEdit::FlatRateDeltaU),
        (0_usize..8, row_strategy()).prop_map(|(index, row)| InputEdit::SetRow { index, row }),
        row_strategy().prop_map(InputEdit::PushRow),
        (0_usize..8).prop_map(InputEdit::RemoveRow),
        (
            proptest::sample::select(Orientation::ALL.to_vec()),
            glazing_strategy()
        )
            .prop_map(|(orientation, gain)| InputEdit::Glazing { orientation, gain }),
    ]
}

fn edit_strategy() -> impl Strategy<Value = InputEdit> {
    prop_oneof![scalar_edit_strategy(), structural_edit_strategy()]
}

proptest! {
    #[test]
    fn heat_transfer_is_envelope_plus_bridges(request in request_strategy()) {
        let r = calculate(&request);
        prop_assert_eq!(r.total_heat_transfer, r.sum_bua + r.thermal_bridges_impact);
        prop_assert!(r.sum_area >= 0.0);
        prop_assert!(r.sum_bua >= 0.0);
    }

    #[test]
    fn uem_undefined_iff_no_envelope_area(request in request_strategy()) {
        let r = calculate(&request);
        prop_assert_eq!(r.avg_coefficient.is_none(), r.sum_area == 0.0);
    }

    #[test]
    fn heat_need_decreases_with_gains(
        request in request_strategy(),
        extra_area in 0.1_f64..20.0,
        extra_floor in 0.1_f64..100.0,
    ) {
        let base = calculate(&request);

        let mut sunnier = request.clone();
        let south = *sunnier.glazing(Orientation::South);
        sunnier.set_glazing(
            Orientation::South,
            OrientationGain::new(south.g, south.glazed_area + extra_area),
        );
        prop_assert!(calculate(&sunnier).heat_need <= base.heat_need);

        // Holding losses fixed, raise internal gains through qi.
        let mut busier = request.clone();
        busier.building.internal_gain_class = Some(InternalGainClass::NonResidential);
        let mut quieter = request;
        quieter.building.internal_gain_class = Some(InternalGainClass::FamilyHouse);
        quieter.building.floor_area += extra_floor;
        busier.building.floor_area = quieter.building.floor_area;
        prop_assert!(calculate(&busier).heat_need <= calculate(&quieter).heat_need);
    }

    #[test]
    fn non_positive_targets_never_comply(actual in -100.0_f64..100.0, target in -100.0_f64..=0.0) {
        let check = ComplianceCheck::evaluate(Some(actual), Some(target));
        prop_assert_eq!(check.outcome, Compliance::NonCompliant);
    }

    #[test]
    fn incremental_equals_full(
        request in request_strategy(),
        edits in proptest::collection::vec(edit_strategy(), 1..12),
    ) {
        let mut pipeline = Pipeline::new(request);
        for edit in edits {
            // Out-of-range row edits are rejected without side effects.
            let _ = pipeline.apply(edit);
            let full = calculate(pipeline.request());
            prop_assert_eq!(pipeline.result(), &full);
        }
    }

    #[test]
    fn full_recompute_is_idempotent(request in request_strategy()) {
        let mut pipeline = Pipeline::new(request);
        let first = pipeline.result().clone();
        prop_assert_eq!(pipeline.recompute(), &first);
    }
}
