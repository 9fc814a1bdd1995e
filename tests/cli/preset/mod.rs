mod conflict_contract;
mod logging_contract;
mod no_tty_contract;
mod unknown_preset_contract;
