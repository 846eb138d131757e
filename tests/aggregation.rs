use chrono::NaiveDate;
use trade_settlement_report::{
    Accumulator, AmountAccumulator, DailyReports, Direction, Instruction, Money,
    RankingAccumulator, ReportAggregator, ReportError, ReportKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn money(s: &str) -> Money {
    s.parse().expect("valid decimal")
}

fn instr(
    entity: &str,
    direction: Direction,
    fx: &str,
    currency: &str,
    settlement: NaiveDate,
    units: u32,
    price: &str,
) -> Instruction {
    Instruction::new(
        entity,
        direction,
        money(fx),
        currency,
        date(2017, 6, 9),
        settlement,
        units,
        money(price),
    )
    .expect("valid instruction")
}

/// Пакет из эталонного прогона: 12, 13 и 18 июня 2017.
fn reference_batch() -> Vec<Instruction> {
    vec![
        instr("Entity #1", Direction::Sell, "0.5", "INR", date(2017, 6, 12), 200, "100.25"),
        instr("Entity #2", Direction::Sell, "0.15", "AUD", date(2017, 6, 12), 1000, "95.25"),
        instr("Entity #3", Direction::Sell, "0.15", "EUR", date(2017, 6, 11), 550, "101.25"),
        instr("Entity #2", Direction::Buy, "0.15", "EUR", date(2017, 6, 12), 550, "101.25"),
        instr("Entity #4", Direction::Buy, "0.15", "EUR", date(2017, 6, 13), 330, "101.25"),
        instr("Entity #5", Direction::Sell, "0.15", "SGD", date(2017, 6, 13), 550, "101.25"),
        instr("Entity #4", Direction::Buy, "0.15", "SAR", date(2017, 6, 16), 550, "155.25"),
    ]
}

fn aggregate(mut batch: Vec<Instruction>) -> DailyReports {
    ReportAggregator::default().aggregate(&mut batch)
}

#[test]
fn trade_amount_is_price_units_fx() {
    let i = instr("foo", Direction::Sell, "0.5", "SGD", date(2017, 6, 12), 200, "100.25");
    assert_eq!(i.trade_amount(), money("10025"));

    let reports = aggregate(vec![i]);
    let day = reports.get(date(2017, 6, 12)).expect("report for date");
    assert_eq!(day.incoming_amount().to_string(), "10025.000");
}

#[test]
fn trade_amount_is_fixed_at_construction() {
    let mut i = instr("foo", Direction::Buy, "0.5", "AED", date(2017, 6, 16), 200, "100.25");
    let before = i.trade_amount();
    i.set_settlement_date(date(2017, 6, 30));
    assert_eq!(i.trade_amount(), before);
}

#[test]
fn reference_batch_amounts_and_rankings() {
    let reports = aggregate(reference_batch());
    let dates: Vec<_> = reports.dates().collect();
    assert_eq!(dates, vec![date(2017, 6, 12), date(2017, 6, 13), date(2017, 6, 18)]);

    let jun12 = reports.get(date(2017, 6, 12)).expect("12 Jun");
    assert_eq!(jun12.incoming_amount(), money("32665.625"));
    assert_eq!(jun12.outgoing_amount(), money("8353.125"));
    let incoming: Vec<_> = jun12
        .incoming_ranking()
        .into_iter()
        .map(|e| e.entity)
        .collect();
    assert_eq!(incoming, vec!["Entity #2", "Entity #1", "Entity #3"]);

    let jun13 = reports.get(date(2017, 6, 13)).expect("13 Jun");
    assert_eq!(jun13.outgoing_amount(), money("5011.875"));
    let outgoing = jun13.outgoing_ranking();
    assert_eq!(outgoing.len(), 1);
    assert_eq!(outgoing[0].entity, "Entity #4");
    assert_eq!(outgoing[0].amount.to_string(), "5011.875");

    let jun18 = reports.get(date(2017, 6, 18)).expect("18 Jun");
    assert_eq!(jun18.outgoing_amount(), money("12808.125"));
    assert!(reports.get(date(2017, 6, 16)).is_none());
}

#[test]
fn instructions_carry_resolved_dates_after_aggregation() {
    let mut batch = reference_batch();
    ReportAggregator::default().aggregate(&mut batch);
    assert_eq!(batch[2].settlement_date(), date(2017, 6, 12));
    assert_eq!(batch[6].settlement_date(), date(2017, 6, 18));
}

#[test]
fn two_sells_on_same_date_sum_up() {
    let reports = aggregate(vec![
        instr("A", Direction::Sell, "0.5", "INR", date(2017, 6, 12), 200, "100.25"),
        instr("B", Direction::Sell, "0.15", "AUD", date(2017, 6, 12), 1000, "95.25"),
        instr("C", Direction::Sell, "0.15", "EUR", date(2017, 6, 12), 550, "101.25"),
    ]);
    let day = reports.get(date(2017, 6, 12)).expect("report");
    assert_eq!(day.incoming_amount().to_string(), "32665.625");
}

#[test]
fn ranking_lists_only_matching_direction() {
    let reports = aggregate(vec![
        instr("Big", Direction::Sell, "1", "USD", date(2017, 6, 14), 1, "150.7"),
        instr("Small", Direction::Sell, "1", "USD", date(2017, 6, 14), 1, "52.55"),
        instr("Buyer", Direction::Buy, "1", "USD", date(2017, 6, 15), 1, "999"),
    ]);
    let day = reports.get(date(2017, 6, 14)).expect("report");
    let ranking = day.incoming_ranking();
    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].entity, "Big");
    assert_eq!(ranking[0].amount.to_string(), "150.700");
    assert_eq!(ranking[1].entity, "Small");
    assert_eq!(ranking[1].amount.to_string(), "52.550");
    assert!(day.outgoing_ranking().is_empty());
}

#[test]
fn buy_only_date_still_has_every_report() {
    let reports = aggregate(vec![instr(
        "Buyer",
        Direction::Buy,
        "0.15",
        "EUR",
        date(2017, 6, 13),
        330,
        "101.25",
    )]);
    let day = reports.get(date(2017, 6, 13)).expect("report");
    for kind in ReportKind::ALL {
        assert!(day.get(kind).is_some(), "{kind} missing");
    }
    assert_eq!(day.incoming_amount().to_string(), "0.000");
    assert!(day.incoming_ranking().is_empty());
    assert_eq!(
        day.ranking_report(ReportKind::IncomingRanking).map(RankingAccumulator::len),
        Some(0)
    );
}

#[test]
fn every_date_has_all_four_kinds() {
    let reports = aggregate(reference_batch());
    for day in &reports {
        let kinds: Vec<_> = day.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ReportKind::ALL.to_vec());
        for (kind, acc) in day.iter() {
            assert_eq!(kind.is_ranking(), matches!(acc, Accumulator::Ranking(_)));
        }
    }
}

#[test]
fn result_does_not_depend_on_instruction_order() {
    let expected = aggregate(reference_batch());

    let mut reversed = reference_batch();
    reversed.reverse();
    assert_eq!(aggregate(reversed), expected);

    for shift in 1..reference_batch().len() {
        let mut rotated = reference_batch();
        rotated.rotate_left(shift);
        assert_eq!(aggregate(rotated), expected);
    }
}

#[test]
fn ranking_is_non_increasing() {
    let mut batch = reference_batch();
    batch.push(instr("Entity #1", Direction::Sell, "1", "USD", date(2017, 6, 12), 3, "7000"));
    let reports = aggregate(batch);
    for day in &reports {
        for ranking in [day.incoming_ranking(), day.outgoing_ranking()] {
            assert!(ranking.windows(2).all(|w| w[0].amount >= w[1].amount));
        }
    }
    let jun12 = reports.get(date(2017, 6, 12)).expect("12 Jun");
    assert_eq!(jun12.incoming_ranking()[0].entity, "Entity #1");
    assert_eq!(jun12.incoming_ranking()[0].amount, money("31025"));
}

#[test]
fn equal_totals_are_ordered_by_entity_name() {
    let reports = aggregate(vec![
        instr("Charlie", Direction::Buy, "1", "USD", date(2017, 6, 12), 1, "10"),
        instr("Alpha", Direction::Buy, "1", "USD", date(2017, 6, 12), 1, "10"),
        instr("Bravo", Direction::Buy, "1", "USD", date(2017, 6, 12), 2, "5"),
        instr("Delta", Direction::Buy, "1", "USD", date(2017, 6, 12), 1, "11"),
    ]);
    let names: Vec<_> = reports
        .get(date(2017, 6, 12))
        .expect("report")
        .outgoing_ranking()
        .into_iter()
        .map(|e| e.entity)
        .collect();
    assert_eq!(names, vec!["Delta", "Alpha", "Bravo", "Charlie"]);
}

#[test]
fn amount_is_rounded_only_on_read() {
    let reports = aggregate(vec![
        instr("A", Direction::Sell, "1", "USD", date(2017, 6, 12), 1, "0.0004"),
        instr("B", Direction::Sell, "1", "USD", date(2017, 6, 12), 1, "0.0004"),
    ]);
    let day = reports.get(date(2017, 6, 12)).expect("report");
    let acc = day
        .amount_report(ReportKind::IncomingAmount)
        .expect("amount report");
    assert_eq!(acc.raw_total(), money("0.0008"));
    assert_eq!(acc.value().to_string(), "0.001");
}

#[test]
fn partial_aggregates_merge_to_whole_batch() {
    let batch = reference_batch();
    let whole = aggregate(batch.clone());

    let (left, right) = batch.split_at(3);
    let left = aggregate(left.to_vec());
    let right = aggregate(right.to_vec());

    let mut merged = left.clone();
    merged.merge(&right);
    assert_eq!(merged, whole);

    let mut merged_other_way = right;
    merged_other_way.merge(&left);
    assert_eq!(merged_other_way, whole);
}

#[test]
fn report_kind_titles_round_trip() {
    for kind in ReportKind::ALL {
        assert_eq!(kind.to_string().parse::<ReportKind>().expect("known title"), kind);
    }
    assert_eq!(
        "daily incoming ranking".parse::<ReportKind>().expect("case-insensitive"),
        ReportKind::IncomingRanking
    );
    assert!("DAILY NET AMOUNT".parse::<ReportKind>().is_err());
    assert_eq!(ReportKind::IncomingAmount.direction(), Direction::Sell);
    assert_eq!(ReportKind::OutgoingRanking.direction(), Direction::Buy);
}

#[test]
fn empty_batch_gives_no_dates() {
    let reports = aggregate(Vec::new());
    assert!(reports.is_empty());
    assert_eq!(reports.len(), 0);
}

#[test]
fn ranking_total_for_entity() {
    let reports = aggregate(reference_batch());
    let ranking = reports
        .get(date(2017, 6, 12))
        .and_then(|day| day.ranking_report(ReportKind::IncomingRanking))
        .expect("incoming ranking");
    assert_eq!(
        ranking.total_for("Entity #2").map(|m| m.to_string()),
        Some("14287.500".to_string())
    );
    assert_eq!(ranking.total_for("Entity #4"), None);
}

#[test]
fn trade_amount_overflow_is_an_error() {
    let result = Instruction::new(
        "foo",
        Direction::Buy,
        money("1"),
        "USD",
        date(2016, 1, 1),
        date(2016, 1, 4),
        4_000_000_000,
        money("100000000000000000000"),
    );
    assert!(matches!(
        result,
        Err(ReportError::AmountOverflow { ref entity }) if entity == "foo"
    ));
}

#[test]
fn daily_total_saturates_instead_of_panicking() {
    let near_max = "50000000000000000000000000000";
    let reports = aggregate(vec![
        instr("A", Direction::Sell, "1", "USD", date(2017, 6, 12), 1, near_max),
        instr("A", Direction::Sell, "1", "USD", date(2017, 6, 12), 1, near_max),
    ]);
    let day = reports.get(date(2017, 6, 12)).expect("report");
    let total = day
        .amount_report(ReportKind::IncomingAmount)
        .map(AmountAccumulator::raw_total);
    assert_eq!(total, Some(Money::MAX));
    assert_eq!(
        day.ranking_report(ReportKind::IncomingRanking)
            .and_then(|r| r.ranking().first().map(|e| e.entity.clone())),
        Some("A".to_string())
    );
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "accumulators of different kinds")]
fn merging_different_kinds_is_rejected() {
    let mut amount = Accumulator::for_kind(ReportKind::IncomingAmount);
    amount.merge(&Accumulator::for_kind(ReportKind::IncomingRanking));
}
