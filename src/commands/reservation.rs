use std::sync::Arc;

use crate::{
    commands::command_error::CommandError, reply::Reply, reservation::ReservationService,
};

/// Arguments shared by RESERVE and CHECKOUT: a resource and a numeric user ID.
pub struct ReservationArguments {
    resource_id: String,
    user_id: u64,
}

impl ReservationArguments {
    pub fn parse(arguments: Vec<String>, is_checkout: bool) -> Result<Self, CommandError> {
        if arguments.len() != 2 {
            return if is_checkout {
                Err(CommandError::InvalidCheckoutCommand)
            } else {
                Err(CommandError::InvalidReserveCommand)
            };
        }

        let user_id = arguments[1]
            .parse::<u64>()
            .map_err(|_| CommandError::InvalidIntegerArgument)?;

        Ok(Self {
            resource_id: arguments[0].clone(),
            user_id,
        })
    }
}

pub async fn reserve(
    reservations: Arc<ReservationService>,
    arguments: Vec<String>,
) -> Result<Reply, CommandError> {
    let reserve_arguments = ReservationArguments::parse(arguments, false)?;

    let reserved = reservations
        .reserve(&reserve_arguments.resource_id, reserve_arguments.user_id)
        .await?;

    Ok(Reply::Boolean(reserved))
}

pub async fn checkout(
    reservations: Arc<ReservationService>,
    arguments: Vec<String>,
) -> Result<Reply, CommandError> {
    let checkout_arguments = ReservationArguments::parse(arguments, true)?;

    let checked_out = reservations
        .checkout(&checkout_arguments.resource_id, checkout_arguments.user_id)
        .await?;

    Ok(Reply::Boolean(checked_out))
}
