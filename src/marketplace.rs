multiversx_sc::imports!();

use crate::types::{Citizen, CityZone, Hash, Item, RentedItemMetadata, Society};

const MAX_TAX_RATE_PERCENT: u64 = 100;

#[multiversx_sc::module]
pub trait MarketplaceModule:
    crate::permissions::PermissionsModule
    + crate::pricing::PricingModule
    + crate::citizens::CitizensModule
{
    // ========================================================
    // ENDPOINT: addSociety
    // ========================================================

    #[endpoint(addSociety)]
    fn add_society(&self, name: ManagedBuffer) -> Hash<Self::Api> {
        self.require_admin();

        let society_hash = self.crypto().keccak256(&name);
        require!(
            self.society_id(&society_hash).is_empty(),
            "Society already registered"
        );

        let id = self.society_count().get() + 1;
        self.society_count().set(id);
        self.societies(id).set(&Society { name: name.clone() });
        self.society_id(&society_hash).set(id);

        self.society_added_event(&society_hash, id, &name);
        society_hash
    }

    // ========================================================
    // ENDPOINT: addCityZone
    // ========================================================

    #[endpoint(addCityZone)]
    fn add_city_zone(&self, society_hash: Hash<Self::Api>, name: ManagedBuffer) -> Hash<Self::Api> {
        self.require_admin();

        let society_id = self.society_id(&society_hash).get();
        if society_id == 0 {
            let hash_hex = society_hash.as_managed_buffer().clone();
            sc_panic!("Unknown society: {:x}", hash_hex);
        }

        let zone_hash = self.child_hash(&society_hash, &name);
        require!(
            self.city_zone_id(&zone_hash).is_empty(),
            "City zone already registered"
        );

        let id = self.city_zone_count().get() + 1;
        self.city_zone_count().set(id);
        self.city_zones(id).set(&CityZone {
            name: name.clone(),
            society_id,
        });
        self.city_zone_id(&zone_hash).set(id);

        self.city_zone_added_event(&zone_hash, id, society_id, &name);
        zone_hash
    }

    // ========================================================
    // ENDPOINT: addItem
    // All parameters are validated before any state mutation.
    // ========================================================

    #[allow(clippy::too_many_arguments)]
    #[endpoint(addItem)]
    fn add_item(
        &self,
        city_zone_hash: Hash<Self::Api>,
        name: ManagedBuffer,
        initial_price: BigUint,
        minimal_price: BigUint,
        depreciation_rate: BigUint,
        depreciation_interval: u64,
        notice_period: u64,
        tax_rate: u64,
    ) -> Hash<Self::Api> {
        self.require_admin();

        let city_zone_id = self.city_zone_id(&city_zone_hash).get();
        if city_zone_id == 0 {
            let hash_hex = city_zone_hash.as_managed_buffer().clone();
            sc_panic!("Unknown city zone: {:x}", hash_hex);
        }

        require!(initial_price > 0u64, "Initial price must be positive");
        require!(minimal_price > 0u64, "Minimal price must be positive");
        require!(
            minimal_price <= initial_price,
            "Minimal price above initial price"
        );
        require!(
            depreciation_rate > 0u64,
            "Depreciation rate must be positive"
        );
        require!(
            depreciation_interval > 0,
            "Depreciation interval must be positive"
        );
        require!(
            tax_rate <= MAX_TAX_RATE_PERCENT,
            "Tax rate above 100 percent"
        );

        let item_hash = self.child_hash(&city_zone_hash, &name);
        require!(
            self.item_id(&item_hash).is_empty(),
            "Item already registered"
        );

        let id = self.item_count().get() + 1;
        self.item_count().set(id);

        let item = Item {
            name: name.clone(),
            city_zone_id,
            current_price: initial_price.clone(),
            initial_price,
            minimal_price,
            depreciation_rate,
            depreciation_interval,
            notice_period,
            tax_rate,
            last_release_timestamp: self.blockchain().get_block_timestamp(),
            is_rented: false,
            current_renter: ManagedAddress::zero(),
        };
        self.items(id).set(&item);
        self.item_id(&item_hash).set(id);

        self.item_added_event(&item_hash, id, city_zone_id, &name);
        item_hash
    }

    // ========================================================
    // ENDPOINT: rentItem
    // Taking over a rented item refunds the displaced tenant the
    // price they were paying and keeps them tax-liable through
    // the notice period; the incoming tenant's accrual starts
    // only after that period.
    // ========================================================

    #[endpoint(rentItem)]
    fn rent_item(&self, item_hash: Hash<Self::Api>, new_price: BigUint) {
        let caller = self.blockchain().get_caller();
        self.require_citizen(&caller);

        let item_id = self.resolve_item(&item_hash);
        let mut item = self.items(item_id).get();
        let now = self.blockchain().get_block_timestamp();

        let price = self.current_item_price(&item, now);
        require!(
            self.citizens(&caller).get().balance >= BigInt::from(price),
            "Insufficient balance"
        );

        if item.is_rented {
            let outgoing = item.current_renter.clone();
            let refund = item.current_price.clone();
            let notice_deadline = now + item.notice_period;
            self.citizens(&outgoing).update(|citizen| {
                citizen.balance += BigInt::from(refund);
                self.close_open_rental(citizen, &item_hash, notice_deadline);
            });
        }

        item.current_price = new_price.clone();
        item.current_renter = caller.clone();
        item.is_rented = true;
        self.items(item_id).set(&item);

        let rented_from = now + item.notice_period;
        self.citizens(&caller).update(|citizen| {
            // The gate above checks the quoted price; the debit is the agreed
            // price, so a bid above the quote can overdraw the signed balance.
            citizen.balance -= BigInt::from(new_price.clone());
            citizen.rentals.push(RentedItemMetadata {
                item_hash: item_hash.clone(),
                rented_from,
                rented_until: 0,
                price: new_price.clone(),
                tax_rate: item.tax_rate,
            });
        });

        self.item_rented_event(&item_hash, &caller, &new_price, now);
    }

    // ========================================================
    // ENDPOINT: releaseItem
    // ========================================================

    #[endpoint(releaseItem)]
    fn release_item(&self, item_hash: Hash<Self::Api>) {
        let caller = self.blockchain().get_caller();
        self.require_citizen(&caller);

        let item_id = self.resolve_item(&item_hash);
        let mut item = self.items(item_id).get();
        require!(item.is_rented, "Item is not rented");
        require!(item.current_renter == caller, "Item not rented by caller");

        let now = self.blockchain().get_block_timestamp();
        let refund = item.current_price.clone();
        self.citizens(&caller).update(|citizen| {
            citizen.balance += BigInt::from(refund);
            self.close_open_rental(citizen, &item_hash, now);
        });

        item.is_rented = false;
        item.current_renter = ManagedAddress::zero();
        item.last_release_timestamp = now;
        item.current_price = item.initial_price.clone();
        self.items(item_id).set(&item);

        self.item_released_event(&item_hash, &caller, now);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    /// Closes the citizen's single open metadata entry for the item.
    /// At most one open entry per item per citizen exists by construction.
    fn close_open_rental(
        &self,
        citizen: &mut Citizen<Self::Api>,
        item_hash: &Hash<Self::Api>,
        rented_until: u64,
    ) {
        let mut updated = ManagedVec::new();
        let mut closed = false;
        for mut entry in citizen.rentals.iter() {
            if !closed && entry.rented_until == 0 && entry.item_hash == *item_hash {
                entry.rented_until = rented_until;
                closed = true;
            }
            updated.push(entry);
        }
        citizen.rentals = updated;
    }

    fn resolve_item(&self, item_hash: &Hash<Self::Api>) -> u64 {
        let item_id = self.item_id(item_hash).get();
        if item_id == 0 {
            let hash_hex = item_hash.as_managed_buffer().clone();
            sc_panic!("Unknown item: {:x}", hash_hex);
        }
        item_id
    }

    fn child_hash(&self, parent_hash: &Hash<Self::Api>, name: &ManagedBuffer) -> Hash<Self::Api> {
        let mut data = ManagedBuffer::new();
        data.append(parent_hash.as_managed_buffer());
        data.append(name);
        self.crypto().keccak256(data)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getItem)]
    fn get_item(&self, item_hash: Hash<Self::Api>) -> Item<Self::Api> {
        self.items(self.resolve_item(&item_hash)).get()
    }

    #[view(getItemPrice)]
    fn get_item_price(&self, item_hash: Hash<Self::Api>) -> BigUint {
        let item = self.items(self.resolve_item(&item_hash)).get();
        let now = self.blockchain().get_block_timestamp();
        self.current_item_price(&item, now)
    }

    /// Zero address while vacant.
    #[view(getItemRenter)]
    fn get_item_renter(&self, item_hash: Hash<Self::Api>) -> ManagedAddress {
        self.items(self.resolve_item(&item_hash)).get().current_renter
    }

    #[view(isItemRented)]
    fn is_item_rented(&self, item_hash: Hash<Self::Api>) -> bool {
        self.items(self.resolve_item(&item_hash)).get().is_rented
    }

    #[view(getSociety)]
    fn get_society(&self, society_hash: Hash<Self::Api>) -> Society<Self::Api> {
        let society_id = self.society_id(&society_hash).get();
        if society_id == 0 {
            let hash_hex = society_hash.as_managed_buffer().clone();
            sc_panic!("Unknown society: {:x}", hash_hex);
        }
        self.societies(society_id).get()
    }

    #[view(getCityZone)]
    fn get_city_zone(&self, zone_hash: Hash<Self::Api>) -> CityZone<Self::Api> {
        let zone_id = self.city_zone_id(&zone_hash).get();
        if zone_id == 0 {
            let hash_hex = zone_hash.as_managed_buffer().clone();
            sc_panic!("Unknown city zone: {:x}", hash_hex);
        }
        self.city_zones(zone_id).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("societyAdded")]
    fn society_added_event(
        &self,
        #[indexed] society_hash: &Hash<Self::Api>,
        #[indexed] id: u64,
        name: &ManagedBuffer,
    );

    #[event("cityZoneAdded")]
    fn city_zone_added_event(
        &self,
        #[indexed] zone_hash: &Hash<Self::Api>,
        #[indexed] id: u64,
        #[indexed] society_id: u64,
        name: &ManagedBuffer,
    );

    #[event("itemAdded")]
    fn item_added_event(
        &self,
        #[indexed] item_hash: &Hash<Self::Api>,
        #[indexed] id: u64,
        #[indexed] city_zone_id: u64,
        name: &ManagedBuffer,
    );

    #[event("itemRented")]
    fn item_rented_event(
        &self,
        #[indexed] item_hash: &Hash<Self::Api>,
        #[indexed] renter: &ManagedAddress,
        #[indexed] price: &BigUint,
        timestamp: u64,
    );

    #[event("itemReleased")]
    fn item_released_event(
        &self,
        #[indexed] item_hash: &Hash<Self::Api>,
        #[indexed] renter: &ManagedAddress,
        timestamp: u64,
    );

    // ========================================================
    // STORAGE
    // Dense 1-based id tables with a hash -> id index; an empty
    // index entry decodes to 0, the "not found" sentinel.
    // ========================================================

    #[view(getSocietyCount)]
    #[storage_mapper("societyCount")]
    fn society_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("societies")]
    fn societies(&self, id: u64) -> SingleValueMapper<Society<Self::Api>>;

    #[storage_mapper("societyId")]
    fn society_id(&self, society_hash: &Hash<Self::Api>) -> SingleValueMapper<u64>;

    #[view(getCityZoneCount)]
    #[storage_mapper("cityZoneCount")]
    fn city_zone_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("cityZones")]
    fn city_zones(&self, id: u64) -> SingleValueMapper<CityZone<Self::Api>>;

    #[storage_mapper("cityZoneId")]
    fn city_zone_id(&self, zone_hash: &Hash<Self::Api>) -> SingleValueMapper<u64>;

    #[view(getItemCount)]
    #[storage_mapper("itemCount")]
    fn item_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("items")]
    fn items(&self, id: u64) -> SingleValueMapper<Item<Self::Api>>;

    #[storage_mapper("itemId")]
    fn item_id(&self, item_hash: &Hash<Self::Api>) -> SingleValueMapper<u64>;
}
