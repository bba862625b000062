mod common;

use pinochle_engine::ai::{registered_strategies, BidView, PassView, PlayView, StrategyOptions};
use pinochle_engine::domain::bidding::{BidState, Contract};
use pinochle_engine::domain::dealing::deal_hands;
use pinochle_engine::domain::meld::MeldTable;
use pinochle_engine::domain::passing::select_pass_cards;
use pinochle_engine::domain::rules::{PASS, PASS_SUBSETS};
use pinochle_engine::domain::tricks::{legal_moves, TrickProgress};

fn options(seed: u64) -> StrategyOptions {
    StrategyOptions {
        seed: Some(seed),
        ..StrategyOptions::default()
    }
}

#[test]
fn every_strategy_bids_within_the_action_space() {
    let table = MeldTable::standard();
    for factory in registered_strategies() {
        for seed in 0..16 {
            let strategy = (factory.make)(&options(seed));
            let hands = deal_hands(seed).unwrap();
            let mut bidding = BidState::new();
            bidding.place_bid(0, 30).unwrap();
            let view = BidView {
                seat: 1,
                hand: &hands[1],
                bidding: &bidding,
                meld_table: &table,
            };
            let bid = strategy.choose_bid(&view).unwrap();
            assert!(
                bid == PASS || bid > 30,
                "{} bid {bid} over 30",
                factory.name
            );
        }
    }
}

#[test]
fn every_strategy_passes_and_returns_held_cards() {
    for factory in registered_strategies() {
        for seed in 0..16 {
            let strategy = (factory.make)(&options(seed));
            let hands = deal_hands(seed).unwrap();
            let contract = Contract::declare(0, 30, &hands[0]);

            let view = PassView {
                seat: 2,
                hand: &hands[2],
                contract: &contract,
            };
            let index = strategy.choose_pass(&view).unwrap();
            assert!(index < PASS_SUBSETS, "{} pass index {index}", factory.name);
            let passed = select_pass_cards(&hands[2], index).unwrap();

            let mut declarer = hands[0].clone();
            declarer.extend_from_slice(&passed);
            let view = PassView {
                seat: 0,
                hand: &declarer,
                contract: &contract,
            };
            let returned = strategy.choose_return(&view).unwrap();
            for card in returned {
                assert!(declarer.contains(&card), "{} returned {card}", factory.name);
            }
        }
    }
}

#[test]
fn every_strategy_plays_legally() {
    for factory in registered_strategies() {
        for seed in 0..16 {
            let strategy = (factory.make)(&options(seed));
            let hands = deal_hands(seed).unwrap();
            let contract = Contract::declare(3, 30, &hands[3]);
            let progress = TrickProgress::new(contract);
            let view = PlayView {
                seat: 3,
                hand: &hands[3],
                trick: &progress.current,
            };
            let card = strategy.choose_play(&view).unwrap();
            let legal = legal_moves(&progress.current, 3, &hands[3]);
            assert!(legal.contains(&card), "{} played {card}", factory.name);
        }
    }
}
