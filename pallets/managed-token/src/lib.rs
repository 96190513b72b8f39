#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated storage getters until call sites move to direct storage access
#![allow(deprecated)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use scale_info::TypeInfo;
use sp_std::{collections::btree_map::BTreeMap, prelude::*};

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod migrations;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// A named permission bucket controlling who may invoke a given operation.
#[derive(
    Encode,
    Decode,
    DecodeWithMemTracking,
    Clone,
    Copy,
    PartialEq,
    Eq,
    RuntimeDebug,
    MaxEncodedLen,
    TypeInfo,
)]
pub enum Role {
    /// Grants and revokes all roles, including itself.
    Admin,
    /// Toggles the burn switch.
    Burner,
    /// Raises the supply cap.
    Capped,
    /// Mints new tokens (single and batch).
    Minter,
    /// Toggles the pause gate.
    Pauser,
}

impl Role {
    /// Every role, in declaration order. Used when seeding the deployer.
    pub const ALL: [Role; 5] =
        [Role::Admin, Role::Burner, Role::Capped, Role::Minter, Role::Pauser];
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Meridian Note")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "MERI")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (18: fixed-point with 18 fractional digits)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Bounded above by `Cap` at all times.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances. An absent key is an implicit zero balance.
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Maximum total supply. Ratchets upward only, via `set_cap`.
    #[pallet::storage]
    #[pallet::getter(fn cap)]
    pub type Cap<T> = StorageValue<_, u128, ValueQuery>;

    /// Global halt flag. While set, every balance-mutating call is rejected.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Burn switch. Burning is disabled until a burner enables it.
    #[pallet::storage]
    #[pallet::getter(fn burning_enabled)]
    pub type BurnEnabled<T> = StorageValue<_, bool, ValueQuery>;

    /// Role membership: (role, account) -> held
    #[pallet::storage]
    #[pallet::getter(fn has_role)]
    pub type Roles<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        Role,
        Blake2_128Concat,
        T::AccountId,
        bool,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A role was granted to an account
        RoleGranted { role: Role, account: T::AccountId },
        /// A role was revoked from an account
        RoleRevoked { role: Role, account: T::AccountId },
        /// The supply cap was raised
        CapRaised { old_cap: u128, new_cap: u128 },
        /// All balance-mutating operations halted
        Paused,
        /// Balance-mutating operations resumed
        Unpaused,
        /// Holders may now burn their own balance
        BurnEnabled,
        /// Burning disabled again
        BurnDisabled,
        /// New tokens minted
        Minted { to: T::AccountId, amount: u128 },
        /// Tokens burned from the caller's own balance
        Burned { from: T::AccountId, amount: u128 },
        /// Tokens transferred from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the operation requires.
        Unauthorized,
        /// A balance-mutating operation was attempted while halted.
        Paused,
        /// A burn was attempted while the burn switch is off.
        BurnDisabled,
        /// Minting would push total supply past the cap.
        CapExceeded,
        /// The new cap is not strictly greater than the current one.
        CapNotIncreasing,
        /// Debit exceeds the account's balance.
        InsufficientBalance,
        /// Batch recipient and amount sequences differ in length.
        LengthMismatch,
        /// Arithmetic would wrap the integer width.
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Add `account` to `role`'s membership set.
        ///
        /// Caller must hold the role's administering role. Granting a role the
        /// account already holds is a no-op that still emits.
        #[pallet::call_index(0)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn grant_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Self::role_admin(role))?;
            Roles::<T>::insert(role, &account, true);
            Self::deposit_event(Event::RoleGranted { role, account });
            Ok(())
        }

        /// Remove `account` from `role`'s membership set.
        ///
        /// Caller must hold the role's administering role. Revoking a role the
        /// account does not hold is a no-op that still emits.
        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn revoke_role(
            origin: OriginFor<T>,
            role: Role,
            account: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Self::role_admin(role))?;
            Roles::<T>::remove(role, &account);
            Self::deposit_event(Event::RoleRevoked { role, account });
            Ok(())
        }

        /// Raise the supply cap. The cap only ever moves upward.
        #[pallet::call_index(2)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn set_cap(origin: OriginFor<T>, new_cap: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Capped)?;
            let old_cap = Cap::<T>::get();
            ensure!(new_cap > old_cap, Error::<T>::CapNotIncreasing);
            Cap::<T>::put(new_cap);
            Self::deposit_event(Event::CapRaised { old_cap, new_cap });
            Ok(())
        }

        /// Halt all balance-mutating operations.
        ///
        /// Pausing while already paused is allowed state-setting, not an error.
        #[pallet::call_index(3)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Pauser)?;
            Paused::<T>::put(true);
            Self::deposit_event(Event::Paused);
            Ok(())
        }

        /// Resume balance-mutating operations.
        #[pallet::call_index(4)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Pauser)?;
            Paused::<T>::put(false);
            Self::deposit_event(Event::Unpaused);
            Ok(())
        }

        /// Allow holders to burn their own balance.
        #[pallet::call_index(5)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn enable_burn(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Burner)?;
            BurnEnabled::<T>::put(true);
            Self::deposit_event(Event::BurnEnabled);
            Ok(())
        }

        /// Forbid burning again.
        #[pallet::call_index(6)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn disable_burn(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Burner)?;
            BurnEnabled::<T>::put(false);
            Self::deposit_event(Event::BurnDisabled);
            Ok(())
        }

        /// Mint `amount` new tokens to `to`, respecting the pause gate and cap.
        #[pallet::call_index(7)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Minter)?;
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            ensure!(new_supply <= Cap::<T>::get(), Error::<T>::CapExceeded);
            TotalSupply::<T>::put(new_supply);
            // No single balance can exceed total supply, so this cannot wrap.
            Balances::<T>::mutate(&to, |bal| *bal = bal.saturating_add(amount));
            Self::deposit_event(Event::Minted { to, amount });
            Ok(())
        }

        /// Mint to several recipients in one call, all-or-nothing.
        ///
        /// The whole batch is validated against a scratch copy of the resulting
        /// supply and balances before anything is written, so a cap violation
        /// or overflow on any element rejects the entire call with no partial
        /// credits.
        #[pallet::call_index(8)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_mul(recipients.len() as u64))]
        pub fn multi_mint(
            origin: OriginFor<T>,
            recipients: Vec<T::AccountId>,
            amounts: Vec<u128>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_role(&who, Role::Minter)?;
            ensure!(recipients.len() == amounts.len(), Error::<T>::LengthMismatch);
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);

            let mut new_supply = TotalSupply::<T>::get();
            let mut credited: BTreeMap<&T::AccountId, u128> = BTreeMap::new();
            for (to, amount) in recipients.iter().zip(amounts.iter()) {
                new_supply = new_supply.checked_add(*amount).ok_or(Error::<T>::Overflow)?;
                // Duplicate recipients accumulate within the batch.
                let balance = credited.entry(to).or_insert_with(|| Balances::<T>::get(to));
                *balance = balance.saturating_add(*amount);
            }
            ensure!(new_supply <= Cap::<T>::get(), Error::<T>::CapExceeded);

            TotalSupply::<T>::put(new_supply);
            for (to, balance) in credited {
                Balances::<T>::insert(to, balance);
            }
            for (to, amount) in recipients.into_iter().zip(amounts.into_iter()) {
                Self::deposit_event(Event::Minted { to, amount });
            }
            Ok(())
        }

        /// Burn `amount` from the caller's own balance.
        ///
        /// Gated by the burn switch and the pause gate; no role is required
        /// beyond the global switch.
        #[pallet::call_index(9)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(BurnEnabled::<T>::get(), Error::<T>::BurnDisabled);
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);
            Balances::<T>::insert(&who, balance - amount);
            // Supply is the sum of all balances, so the debit cannot underflow it.
            TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
            Self::deposit_event(Event::Burned { from: who, amount });
            Ok(())
        }

        /// Transfer `amount` from the caller to `to`.
        ///
        /// Any signed account may transfer. A self-transfer nets to the same
        /// balance and a zero-amount transfer is a permitted no-op; both still
        /// emit.
        #[pallet::call_index(10)]
        #[pallet::weight(Weight::from_parts(10_000, 0))]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::Paused);
            let sender_balance = Balances::<T>::get(&sender);
            ensure!(sender_balance >= amount, Error::<T>::InsufficientBalance);
            if sender != to {
                let receiver_balance =
                    Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(&sender, sender_balance - amount);
                Balances::<T>::insert(&to, receiver_balance);
            }
            Self::deposit_event(Event::Transferred { from: sender, to, amount });
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// The administering role for `role`.
        ///
        /// The hierarchy is flat: all five roles, the admin role included, are
        /// administered by `Role::Admin` (the admin role is its own admin).
        pub fn role_admin(_role: Role) -> Role {
            Role::Admin
        }

        fn ensure_role(who: &T::AccountId, role: Role) -> DispatchResult {
            ensure!(Roles::<T>::get(role, who), Error::<T>::Unauthorized);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deployer account, seeded with all five roles
        pub admin: Option<T::AccountId>,
        /// Maximum total supply at launch; only raisable afterwards
        pub initial_cap: u128,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals (18 for fixed-point 18-digit units)
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);
            Cap::<T>::put(self.initial_cap);

            // Supply starts at zero and both flags start false (ValueQuery
            // defaults); only the cap, metadata, and deployer roles are seeded.
            if let Some(ref admin) = self.admin {
                for role in Role::ALL {
                    Roles::<T>::insert(role, admin, true);
                }
            }
        }
    }
}
