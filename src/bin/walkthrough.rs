//! Prints a scripted tour of storage unit behaviour, including the
//! clamping of invalid inputs.
//!
//! ```bash
//! cargo run --bin storehouse-walkthrough
//! ```

use rust_decimal_macros::dec;

use storehouse::StorageUnit;

fn main() {
    let mut juice = StorageUnit::with_capacity(dec!(100.0));
    let mut beer = StorageUnit::new(dec!(100.0), dec!(20.2));

    println!("After creation:\nJuice: {juice}\nBeer: {beer}");

    println!(
        "Beer getters:\nbalance = {}\ncapacity = {}\nremaining = {}",
        beer.balance(),
        beer.capacity(),
        beer.remaining()
    );

    println!("Juice setters:\nDepositing 50.7");
    juice.deposit(dec!(50.7));
    println!("Juice: {juice}\nWithdrawing 3.14");
    juice.withdraw(dec!(3.14));
    println!("Juice: {juice}");

    println!("Error cases:\nStorageUnit::with_capacity(-100.0)");
    println!("{}", StorageUnit::with_capacity(dec!(-100.0)));

    println!("StorageUnit::new(100.0, -50.7)");
    println!("{}", StorageUnit::new(dec!(100.0), dec!(-50.7)));

    println!("Beer: {beer}\nbeer.deposit(1000.0)");
    beer.deposit(dec!(1000.0));
    println!("Beer: {beer}");

    println!("Juice: {juice}\njuice.deposit(-666.0)");
    juice.deposit(dec!(-666.0));
    println!("Juice: {juice}");

    println!("Beer: {beer}\nbeer.withdraw(1000.0)");
    let got = beer.withdraw(dec!(1000.0));
    println!("got {got}\nBeer: {beer}");

    println!("Juice: {juice}\njuice.withdraw(-32.9)");
    let got = juice.withdraw(dec!(-32.9));
    println!("got {got}\nJuice: {juice}");
}
