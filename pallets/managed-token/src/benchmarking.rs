//! Benchmarking setup for pallet-managed-token

use super::*;

#[allow(unused)]
use crate::Pallet as ManagedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn admin<T: Config>() -> T::AccountId {
    let admin: T::AccountId = whitelisted_caller();
    for role in Role::ALL {
        Roles::<T>::insert(role, &admin, true);
    }
    admin
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn grant_role() {
        let caller = admin::<T>();
        let account: T::AccountId = account("grantee", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, account.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &account), true);
    }

    #[benchmark]
    fn revoke_role() {
        let caller = admin::<T>();
        let account: T::AccountId = account("grantee", 0, 0);
        Roles::<T>::insert(Role::Minter, &account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::Minter, account.clone());

        assert_eq!(Roles::<T>::get(Role::Minter, &account), false);
    }

    #[benchmark]
    fn set_cap() {
        let caller = admin::<T>();
        Cap::<T>::put(1_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 2_000_000u128);

        assert_eq!(Cap::<T>::get(), 2_000_000);
    }

    #[benchmark]
    fn pause() {
        let caller = admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let caller = admin::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn enable_burn() {
        let caller = admin::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(BurnEnabled::<T>::get(), true);
    }

    #[benchmark]
    fn disable_burn() {
        let caller = admin::<T>();
        BurnEnabled::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(BurnEnabled::<T>::get(), false);
    }

    #[benchmark]
    fn mint() {
        let caller = admin::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Cap::<T>::put(u128::MAX);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn multi_mint(n: Linear<1, 100>) {
        let caller = admin::<T>();
        Cap::<T>::put(u128::MAX);
        let recipients: Vec<T::AccountId> =
            (0..n).map(|i| account("recipient", i, 0)).collect();
        let amounts: Vec<u128> = (0..n).map(|_| 1_000u128).collect();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipients.clone(), amounts);

        assert_eq!(TotalSupply::<T>::get(), 1_000u128 * n as u128);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        Cap::<T>::put(u128::MAX);
        TotalSupply::<T>::put(10_000_000u128);
        Balances::<T>::insert(&caller, 10_000_000u128);
        BurnEnabled::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        TotalSupply::<T>::put(10_000_000u128);
        Balances::<T>::insert(&caller, 10_000_000u128);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), 1_000_000u128);

        assert_eq!(Balances::<T>::get(&recipient), 1_000_000);
    }

    impl_benchmark_test_suite!(ManagedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
