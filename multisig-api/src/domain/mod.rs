pub mod multisig;
